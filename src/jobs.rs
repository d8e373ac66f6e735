//! The job-posting registry.
//!
//! Postings are static content loaded once per build from
//! `content/jobs.toml`. The `is_active` flag decides which postings are
//! publicly routable: inactive postings are excluded from path enumeration
//! and the careers listing, but remain resolvable by direct id lookup so
//! already-published URLs keep working.

use crate::dictionary::JobTypes;
use serde::Deserialize;

/// Employment category of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    /// Localized display label from the dictionary.
    pub fn label<'a>(self, labels: &'a JobTypes) -> &'a str {
        match self {
            JobType::FullTime => &labels.full_time,
            JobType::PartTime => &labels.part_time,
            JobType::Contract => &labels.contract,
        }
    }
}

/// A single job posting.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobPosting {
    /// Unique identifier, used as the URL segment.
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub experience: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub is_active: bool,
}

/// Pure filter on `is_active`, preserving input order.
pub fn filter_active(postings: &[JobPosting]) -> Vec<&JobPosting> {
    postings.iter().filter(|j| j.is_active).collect()
}

/// Immutable posting registry. Ids are unique (validated at load).
#[derive(Debug, Clone, Default)]
pub struct Jobs {
    jobs: Vec<JobPosting>,
}

impl Jobs {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// Every posting, active or not.
    pub fn all(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// Active postings only — the publicly routable set.
    pub fn active(&self) -> Vec<&JobPosting> {
        filter_active(&self.jobs)
    }

    /// Direct id lookup. Resolves inactive postings too, so a generated
    /// page for a since-deactivated posting still finds its data.
    pub fn find(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, active: bool) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: format!("Stanowisko {id}"),
            description: "Opis".into(),
            location: "Grodzisk Wielkopolski".into(),
            experience: "2+ lata".into(),
            job_type: JobType::FullTime,
            requirements: vec!["Uprawnienia SEP".into()],
            responsibilities: vec!["Serwis instalacji".into()],
            benefits: vec!["Samochód służbowy".into()],
            is_active: active,
        }
    }

    #[test]
    fn filter_active_keeps_only_active() {
        let postings = vec![posting("a", true), posting("b", false)];
        let active = filter_active(&postings);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "a");
    }

    #[test]
    fn inactive_posting_still_resolves_by_id() {
        let jobs = Jobs::new(vec![posting("a", true), posting("b", false)]);
        assert_eq!(jobs.find("b").unwrap().id, "b");
        assert!(!jobs.find("b").unwrap().is_active);
    }

    #[test]
    fn find_miss_is_none() {
        let jobs = Jobs::new(vec![posting("a", true)]);
        assert!(jobs.find("zzz").is_none());
    }

    #[test]
    fn job_type_parses_snake_case() {
        let job: JobPosting = toml::from_str(
            r#"
id = "serwisant-ssp"
title = "Serwisant SSP"
description = "Serwis systemów sygnalizacji pożaru"
location = "Wielkopolska"
experience = "Mile widziane doświadczenie"
type = "full_time"
requirements = []
responsibilities = []
benefits = []
is_active = true
"#,
        )
        .unwrap();
        assert_eq!(job.job_type, JobType::FullTime);
    }

    #[test]
    fn job_type_labels_come_from_dictionary() {
        let labels = JobTypes {
            full_time: "Pełny etat".into(),
            part_time: "Część etatu".into(),
            contract: "Kontrakt".into(),
        };
        assert_eq!(JobType::FullTime.label(&labels), "Pełny etat");
        assert_eq!(JobType::Contract.label(&labels), "Kontrakt");
    }
}
