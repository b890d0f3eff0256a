// src/progress.rs
/// Lightweight progress reporting for the scrape loop.
/// Frontends (console, tests) implement this to surface status to the operator.
pub trait Progress {
    /// Called once the listing is parsed, with the number of profile URLs found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A profile is about to be fetched. `index` is 0-based.
    fn item_start(&mut self, _index: usize, _url: &str) {}

    /// A profile could not be turned into a record (unreachable or no name).
    fn item_failed(&mut self, _index: usize, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints operator-facing progress lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    failed: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scraping {total} staff profiles...");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_start(&mut self, index: usize, url: &str) {
        println!("Processing {}/{}: {}", index + 1, self.total, url);
    }
    fn item_failed(&mut self, _index: usize, url: &str) {
        self.failed += 1;
        println!("Unable to scrape data at URL {url}");
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            println!("Done ({} of {} profiles could not be scraped)", self.failed, self.total);
        }
    }
}
