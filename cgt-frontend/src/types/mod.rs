//! Type layer: C descriptors, the platform profile, resolution to Go
//! spellings and coercions between them.

mod cast;
pub mod descriptor;
pub mod profile;
mod resolve;

pub use cast::cast_expr;
pub use descriptor::{array_type_and_size, dereference, pointer_to, strip_qualifiers};
pub use profile::{PlatformProfile, NULL_TYPE, OPAQUE_TYPE, RUNTIME_PACKAGE, VOID_TYPE};
pub use resolve::{classify, resolve_type, Shape};
