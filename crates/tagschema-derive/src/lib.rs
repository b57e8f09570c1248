//! # tagschema-derive
//!
//! `#[derive(Describe)]` for structs with named fields. Field annotations are
//! written as `#[tag(json = "id,omitempty", validate = "required,minimum=1")]`;
//! any `key = "value"` pair is recorded, and the generator decides which keys
//! it reads.

use proc_macro::TokenStream;

mod describe;
mod util;

#[proc_macro_derive(Describe, attributes(tag))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input.into()).into()
}
