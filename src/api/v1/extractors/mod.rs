/*
 * Responsibility
 * - handler から使う extractor の re-export
 */
mod negotiated;

pub use negotiated::Negotiated;
