#[derive(Debug, Clone)]
pub enum Progress {
    EnsembleStart { chain_length: usize, n_chains: u64 },
    WalkGenerated,
    EnsembleFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::WalkGenerated);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            let tag = match event {
                Progress::EnsembleStart { chain_length, .. } => format!("start:{chain_length}"),
                Progress::WalkGenerated => "walk".to_string(),
                Progress::EnsembleFinish => "finish".to_string(),
                Progress::Message(msg) => msg,
            };
            seen.lock().unwrap().push(tag);
        }));

        reporter.report(Progress::EnsembleStart {
            chain_length: 10,
            n_chains: 1,
        });
        reporter.report(Progress::WalkGenerated);
        reporter.report(Progress::EnsembleFinish);
        drop(reporter);

        assert_eq!(seen.into_inner().unwrap(), vec!["start:10", "walk", "finish"]);
    }
}
