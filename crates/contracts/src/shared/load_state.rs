/// Lifecycle of a screen's data load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn finish<T, E: std::fmt::Display>(&mut self, result: &Result<T, E>) {
        *self = match result {
            Ok(_) => LoadState::Loaded,
            Err(e) => LoadState::Error(e.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish() {
        let mut state = LoadState::Loading;
        assert!(state.is_loading());
        state.finish::<(), _>(&Err("boom"));
        assert_eq!(state.error(), Some("boom"));
        state.finish::<_, String>(&Ok(1));
        assert!(state.is_loaded());
    }
}
