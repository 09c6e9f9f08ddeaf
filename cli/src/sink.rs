use anyhow::Result;
use easy_widget_core::IntentSink;

/// Hands the link to the host by printing it on stdout.
pub struct StdoutSink;

impl IntentSink for StdoutSink {
    fn emit(&mut self, link: &str) -> Result<()> {
        println!("{}", link);
        Ok(())
    }
}

/// Holds links while the terminal is in the alternate screen; they are
/// flushed to another sink afterwards.
#[derive(Default)]
pub struct DeferredSink {
    pub pending: Vec<String>,
}

impl DeferredSink {
    pub fn flush_into<I: IntentSink>(&mut self, sink: &mut I) -> Result<()> {
        for link in self.pending.drain(..) {
            sink.emit(&link)?;
        }
        Ok(())
    }
}

impl IntentSink for DeferredSink {
    fn emit(&mut self, link: &str) -> Result<()> {
        log::debug!("deferring intent {}", link);
        self.pending.push(link.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl IntentSink for Collect {
        fn emit(&mut self, link: &str) -> Result<()> {
            self.0.push(link.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_deferred_links_are_flushed_once() {
        let mut deferred = DeferredSink::default();
        deferred.emit("easy://start").unwrap();
        deferred.emit("easy://start").unwrap();

        let mut out = Collect::default();
        deferred.flush_into(&mut out).unwrap();
        deferred.flush_into(&mut out).unwrap();

        assert_eq!(out.0, vec!["easy://start", "easy://start"]);
        assert!(deferred.pending.is_empty());
    }
}
