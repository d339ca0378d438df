//! Helper macros shared across the crate.

/// Generates a reference getter for a struct field, or a `_mut` getter for
/// the `mut` form.
#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
    ($field_name:ident, mut $field_type:ty) => {
        paste::paste! {
            pub fn [<$field_name _mut>](&mut self) -> &mut $field_type {
                &mut self.$field_name
            }
        }
    };
}
pub use getter_fn;

/// Generates a builder-style `with_*` setter for a struct field.
#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
