// Domain layer: parsed switch data, the neutral table model and the ports (traits) around them.

pub mod model;
pub mod ports;
pub mod table;
