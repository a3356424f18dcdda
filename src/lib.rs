//! A small **binary STL** writer plus the primitive meshes (cube, pyramid)
//! used as fixtures by 3D-printing and CAM integration tests.
//!
//! ```rust
//! # use stl_fixtures::mesh::Mesh;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pyramid = Mesh::pyramid(8.0, 6.0)?;
//! let bytes = pyramid.to_stl_binary("pyramid")?;
//! assert_eq!(bytes.len(), 84 + 50 * 6);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod fixtures;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod shapes;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use mesh::{Mesh, Triangle};
