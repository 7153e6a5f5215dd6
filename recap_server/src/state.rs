use recap_core::completion::handler::CompletionClient;

#[derive(Clone)]
pub struct ServerState {
    completions: CompletionClient,
}

impl From<CompletionClient> for ServerState {
    fn from(completions: CompletionClient) -> Self {
        Self { completions }
    }
}

impl ServerState {
    pub fn completions(&self) -> &CompletionClient {
        &self.completions
    }
}
