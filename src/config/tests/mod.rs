//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `resolution`: Token, repository, state, layout and output resolution
//! - `loading`: Environment and CLI loading through `load_from_iter`
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod precedence;
