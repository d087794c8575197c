use super::genome::Genome;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Snapshot of one finished generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: f64,
    pub stable_count: usize,
    pub best_genome: Genome,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, report: &GenerationReport);
}

/// Prints one `#  best  same  genome` line per generation.
pub struct ConsoleProgressCallback {
    header_printed: bool,
}

impl ConsoleProgressCallback {
    pub fn new() -> Self {
        Self {
            header_printed: false,
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        if !self.header_printed {
            println!("{:>5} {:>8} {:>5} {}", "#", "best", "same", "genome");
            self.header_printed = true;
        }
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        println!(
            "{:>5} {:>8.4} {:>5} {}",
            report.generation, report.best_fitness, report.stable_count, report.best_genome
        );
    }
}

/// Swallows progress; for library callers that only want the outcome
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _report: &GenerationReport) {}
}

pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationReport),
}

/// Forwards progress over a channel, e.g. to a reporter on another thread.
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(report.clone()));
    }
}
