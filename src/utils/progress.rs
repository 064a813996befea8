use std::io::Write;

/// One-line stderr counter advanced once per processed record.
///
/// Stderr keeps the display away from the CSV stream on stdout.
pub struct Progress {
    total: usize,
    done: usize,
}

impl Progress {
    pub fn start(total: usize) -> Self {
        let bar = Self { total, done: 0 };
        bar.draw();
        bar
    }

    pub fn tick(&mut self) {
        self.done += 1;
        self.draw();
    }

    pub fn finish(&self) {
        eprintln!();
    }

    pub fn done(&self) -> usize {
        self.done
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn draw(&self) {
        eprint!("\rprocessed {} / {}", self.done, self.total);
        let _ = std::io::stderr().flush();
    }
}
