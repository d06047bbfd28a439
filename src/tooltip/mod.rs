pub mod controller;
pub mod state;

pub use controller::{TooltipConfig, TooltipController, TooltipSurface};
pub use state::{Position, Tooltip, TooltipStatus, POINTER_OFFSET};
