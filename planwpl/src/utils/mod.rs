//! Common utils.
