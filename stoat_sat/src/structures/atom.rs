//! Atoms, as dense handles.
//!
//! Handle 0 is reserved and never given out, so a literal may be rendered as a signed
//! integer without ±0 ambiguity.

/// An atom.
pub type Atom = u32;
