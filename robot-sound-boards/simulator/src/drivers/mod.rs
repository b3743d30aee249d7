mod buzzer;

pub use buzzer::SimulatorBuzzer;
