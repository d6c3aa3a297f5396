use async_graphql::Enum;

/// State of one provider lookup owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Pending,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Enum, Copy, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Pending,
    Ready,
    Failed,
}

impl<T> Lookup<T> {
    pub fn status(&self) -> LookupStatus {
        match self {
            Lookup::Pending => LookupStatus::Pending,
            Lookup::Ready(_) => LookupStatus::Ready,
            Lookup::Failed(_) => LookupStatus::Failed,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Lookup::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Lookup::Failed(message) => Some(message),
            _ => None,
        }
    }
}
