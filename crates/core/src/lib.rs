//! Core rendering module - pure, deterministic, and testable
//!
//! Everything needed to turn a mesh into ASCII lives here, with **no terminal
//! I/O**. The binaries own the terminal; this crate only reads model files and
//! writes into in-memory [`Screen`] grids.
//!
//! # Module Structure
//!
//! - [`model`]: vertices, validated edges, the default cube, bounding-box normalization
//! - [`obj`]: OBJ text parser (`v`/`f`/`l`) and the fall-back-to-cube loader
//! - [`transform`]: rotations about the X and Y axes
//! - [`projection`]: perspective projection to integer screen cells plus depth
//! - [`raster`]: depth-shaded Bresenham line drawing
//! - [`screen`]: the character grid
//! - [`raytrace`]: a small sphere ray tracer sharing the same grid
//!
//! # Pipeline
//!
//! One wireframe frame is: rotate every vertex, project every rotated vertex,
//! then draw every edge between the projected endpoints. The frame loop in the
//! engine crate strings these together with reusable scratch buffers.
//!
//! # Example
//!
//! ```
//! use tui_wireframe_core::{draw_line, rotate, Model, Projector, Screen};
//! use tui_wireframe_core::types::{Angles, Preset};
//!
//! let config = Preset::Cube.config();
//! let model = Model::cube();
//! let projector = Projector::new(&config);
//! let mut screen = Screen::new(config.width, config.height);
//!
//! let projected: Vec<_> = model
//!     .vertices()
//!     .iter()
//!     .map(|&v| projector.project(rotate(v, Angles::new(0.4, 0.3))))
//!     .collect();
//! for edge in model.edges() {
//!     draw_line(&mut screen, projected[edge.a()], projected[edge.b()], config.camera_distance);
//! }
//!
//! assert!(screen.lit_count() > 0);
//! ```

pub mod error;
pub mod model;
pub mod obj;
pub mod projection;
pub mod raster;
pub mod raytrace;
pub mod screen;
pub mod transform;

pub use tui_wireframe_types as types;

// Re-export commonly used types for convenience
pub use error::ModelError;
pub use model::{Bounds, Edge, Model, Normalization, CUBE_EDGES, CUBE_VERTICES};
pub use obj::{face_cycle_pairs, load_obj, load_or_default, parse_obj, resolve_index, ObjData};
pub use projection::Projector;
pub use raster::{draw_line, shade_for, shade_index, should_overwrite};
pub use raytrace::{luminance, luminance_glyph, Ray, Scene, Sphere};
pub use screen::Screen;
pub use transform::{rotate, rotate_all_into, rotate_x, rotate_y};
