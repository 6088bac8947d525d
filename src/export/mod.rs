//! Writing one card to disk in every output format.

pub(crate) mod card;
