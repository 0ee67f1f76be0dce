use crate::Emptiness;

/// The one result shape every list and detail screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T, E = String> {
    Pending,
    Success(T),
    Empty,
    Error(E),
}

impl<T: Emptiness, E> QueryStatus<T, E> {
    /// `None` means the request has not settled yet.
    pub fn from_settled(settled: Option<Result<T, E>>) -> Self {
        match settled {
            None => Self::Pending,
            Some(Ok(data)) if data.is_empty() => Self::Empty,
            Some(Ok(data)) => Self::Success(data),
            Some(Err(error)) => Self::Error(error),
        }
    }
}

impl<T, E> QueryStatus<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Status = QueryStatus<Vec<u32>>;

    #[test]
    fn lifecycle() {
        assert_eq!(Status::from_settled(None), QueryStatus::Pending);
        assert_eq!(Status::from_settled(Some(Ok(vec![]))), QueryStatus::Empty);
        assert_eq!(
            Status::from_settled(Some(Ok(vec![1]))),
            QueryStatus::Success(vec![1])
        );
        assert_eq!(
            Status::from_settled(Some(Err("boom".into()))),
            QueryStatus::Error("boom".to_string())
        );
    }

    #[test]
    fn pending_has_no_data() {
        let status = Status::Pending;
        assert!(status.is_pending());
        assert!(status.data().is_none());
        assert!(status.error().is_none());
    }

    #[test]
    fn missing_single_record_is_empty() {
        let status: QueryStatus<Option<u32>> = QueryStatus::from_settled(Some(Ok(None)));
        assert_eq!(status, QueryStatus::Empty);
    }
}
