/// Scripts held back while a page is loading.
///
/// Scripts evaluated during a load would run against the outgoing
/// document, so they wait until the new one has finished loading.
#[derive(Debug, Default)]
pub struct ScriptQueue {
    loading: bool,
    pending: Vec<String>,
}

impl ScriptQueue {
    /// A queue for a widget whose first page is still loading.
    pub fn loading() -> Self {
        Self {
            loading: true,
            pending: Vec::new(),
        }
    }

    /// Hand back `script` if it can run now, otherwise keep it for later.
    pub fn submit(&mut self, script: String) -> Option<String> {
        if self.loading {
            self.pending.push(script);
            None
        } else {
            Some(script)
        }
    }

    /// A new document started loading.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// New content replaces the document: anything still held back was
    /// meant for the outgoing one.
    pub fn restart(&mut self) {
        self.loading = true;
        self.pending.clear();
    }

    /// The document finished loading: everything held back, in order.
    pub fn finish_load(&mut self) -> Vec<String> {
        self.loading = false;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_queue_runs_immediately() {
        let mut queue = ScriptQueue::default();
        assert_eq!(queue.submit("a".into()), Some("a".to_string()));
        assert!(queue.finish_load().is_empty());
    }

    #[test]
    fn loading_queue_holds_scripts_in_order() {
        let mut queue = ScriptQueue::loading();
        assert!(queue.submit("a".into()).is_none());
        assert!(queue.submit("b".into()).is_none());

        assert_eq!(queue.finish_load(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(queue.submit("c".into()), Some("c".to_string()));
    }

    #[test]
    fn begin_load_keeps_already_queued_scripts() {
        let mut queue = ScriptQueue::default();
        queue.begin_load();
        queue.submit("preload".into());
        // The webview reports the navigation start after `load_html` returned.
        queue.begin_load();
        assert_eq!(queue.finish_load(), vec!["preload".to_string()]);
    }

    #[test]
    fn finish_without_pending_is_empty() {
        let mut queue = ScriptQueue::loading();
        assert!(queue.finish_load().is_empty());
    }

    #[test]
    fn restart_drops_scripts_for_outgoing_document() {
        let mut queue = ScriptQueue::loading();
        queue.submit("old".into());
        queue.restart();
        assert!(queue.submit("new".into()).is_none());
        assert_eq!(queue.finish_load(), vec!["new".to_string()]);
    }
}
