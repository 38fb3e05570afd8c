pub mod constants;
pub mod controls;
pub mod cue;
pub mod generator;
pub mod simulation;
pub mod window;

pub use controls::ControlState;
pub use cue::{classify, Cue, CueSink, CueState, SoundCategory};
pub use generator::SignalGenerator;
pub use simulation::{Simulation, Tick};
pub use window::SignalWindow;
