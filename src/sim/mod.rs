pub mod animation;
pub mod constants;
pub mod orb;
pub mod pointer;
pub mod scene;
pub mod strands;
pub mod surface;

pub use animation::*;
pub use constants::*;
pub use orb::*;
pub use pointer::*;
pub use scene::*;
pub use strands::*;
pub use surface::*;
