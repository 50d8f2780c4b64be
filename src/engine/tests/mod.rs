mod common;

mod employment;
mod requiredness;
