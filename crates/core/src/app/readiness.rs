use crate::domain::{DataDomain, DomainStatus, ErrorInfo};

/// Status of every tracked domain at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadinessSnapshot {
    statuses: [DomainStatus; 6],
}

impl ReadinessSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, domain: DataDomain) -> &DomainStatus {
        &self.statuses[domain.index()]
    }

    pub fn set(&mut self, domain: DataDomain, status: DomainStatus) {
        self.statuses[domain.index()] = status;
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, domain: DataDomain, status: DomainStatus) -> Self {
        self.set(domain, status);
        self
    }

    /// Every domain with its status, in `DataDomain::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (DataDomain, &DomainStatus)> {
        DataDomain::ALL.into_iter().map(move |d| (d, self.status(d)))
    }

    /// Per-domain errors; each domain reports only its own error
    pub fn errors(&self) -> impl Iterator<Item = (DataDomain, &ErrorInfo)> {
        self.iter()
            .filter_map(|(domain, status)| status.error.as_ref().map(|e| (domain, e)))
    }

    pub fn populated_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_populated).count()
    }
}

/// Aggregated verdict over all domains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readiness {
    pub is_populated: bool,
    pub has_error: bool,
}

/// Fold the six domain statuses into one verdict.
///
/// A single unpopulated domain keeps the whole set unpopulated and a single
/// error marks the whole set as failed.
pub fn aggregate(snapshot: &ReadinessSnapshot) -> Readiness {
    Readiness {
        is_populated: snapshot.iter().all(|(_, s)| s.is_populated),
        has_error: snapshot.iter().any(|(_, s)| s.has_error()),
    }
}
