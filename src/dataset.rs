//! Display records for the dashboard and the fixed dataset they are loaded from.
//!
//! Every record here is read-only once loaded. Nothing in the dashboard mutates a
//! [`Dataset`]; panels only render it.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Secondary line shown under a metric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// Positive trend text, e.g. "12% vs last week".
    Trend(String),
    /// Highlighted badge, e.g. "Requires HR Review".
    Badge(String),
    /// Link-style action text.
    Link(String),
    /// Muted note.
    Note(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub annotation: Annotation,
}

/// A support question flagged for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionItem {
    pub question: String,
    pub department: String,
    pub elapsed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    pub title: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// 0 to 5 stars.
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub description: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEntry {
    pub text: String,
}

/// Share of questions for one topic. Percentages are author-supplied and are not
/// required to sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicShare {
    pub label: String,
    pub percentage: u8,
    /// Hex color, `#RRGGBB`.
    pub color: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    FileText,
    MessageSquare,
    Upload,
    Send,
    BookOpen,
    Video,
    Phone,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Pending,
    Critical,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatus {
    pub label: String,
    pub value: String,
    pub sub: Option<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub metrics: Vec<Metric>,
    pub attention: Vec<AttentionItem>,
    pub top_asked: Vec<RankedItem>,
    pub feedback: Vec<FeedbackEntry>,
    pub quick_actions: Vec<QuickAction>,
    pub content_status: Vec<ContentStatus>,
    pub activity: Vec<ActivityEntry>,
    pub reminders: Vec<ReminderEntry>,
    pub suggestions: Vec<Suggestion>,
    pub topics: Vec<TopicShare>,
    pub resources: Vec<ResourceLink>,
}

fn metric(label: &str, value: &str, annotation: Annotation) -> Metric {
    Metric {
        label: label.to_string(),
        value: value.to_string(),
        annotation,
    }
}

fn attention(question: &str, department: &str, elapsed: &str) -> AttentionItem {
    AttentionItem {
        question: question.to_string(),
        department: department.to_string(),
        elapsed: elapsed.to_string(),
    }
}

fn ranked(title: &str, count: u32) -> RankedItem {
    RankedItem {
        title: title.to_string(),
        count,
    }
}

fn feedback(rating: u8, comment: &str) -> FeedbackEntry {
    FeedbackEntry {
        rating,
        comment: comment.to_string(),
    }
}

fn status(label: &str, value: &str, sub: Option<&str>, tone: Tone) -> ContentStatus {
    ContentStatus {
        label: label.to_string(),
        value: value.to_string(),
        sub: sub.map(str::to_string),
        tone,
    }
}

fn activity(description: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        description: description.to_string(),
        time: time.to_string(),
    }
}

fn topic(label: &str, percentage: u8, color: &str) -> TopicShare {
    TopicShare {
        label: label.to_string(),
        percentage,
        color: color.to_string(),
    }
}

impl Dataset {
    /// The hardcoded dataset the dashboard ships with.
    pub fn fixed() -> Self {
        Self {
            metrics: vec![
                metric(
                    "Queries This Week",
                    "847",
                    Annotation::Trend("12% vs last week".to_string()),
                ),
                metric(
                    "Unanswered Questions",
                    "23",
                    Annotation::Badge("Requires HR Review".to_string()),
                ),
                metric(
                    "Pending Feedback",
                    "8",
                    Annotation::Link("View feedback queue".to_string()),
                ),
                metric(
                    "Content Items",
                    "134",
                    Annotation::Note("7 updated this week".to_string()),
                ),
            ],
            attention: vec![
                attention(
                    "Can I extend my trip for personal travel at my expense?",
                    "Finance Dept",
                    "2 hours ago",
                ),
                attention(
                    "What's the per diem rate for Nairobi in 2026?",
                    "Research Dept",
                    "4 hours ago",
                ),
                attention(
                    "Do I need pre-approval for business class on 8-hour flights?",
                    "Legal Dept",
                    "Yesterday",
                ),
            ],
            top_asked: vec![
                ranked("Visa application procedures", 127),
                ranked("Per diem rates by country", 94),
                ranked("Flight booking deadlines", 76),
                ranked("Hotel expense limits", 68),
            ],
            feedback: vec![
                feedback(5, "Found exactly what I needed about visa timelines!"),
                feedback(3, "Answer was helpful but could be clearer on exceptions"),
                feedback(1, "Couldn't find info about travel insurance requirements"),
            ],
            quick_actions: [
                (Icon::FileText, "Add New Policy / FAQ"),
                (Icon::FileText, "Update Existing Content"),
                (Icon::MessageSquare, "Review Feedback Queue"),
                (Icon::Upload, "Upload Travel Documents"),
                (Icon::Send, "Send Announcement"),
            ]
            .into_iter()
            .map(|(icon, label)| QuickAction {
                icon,
                label: label.to_string(),
            })
            .collect(),
            content_status: vec![
                status("Published policies", "127", None, Tone::Neutral),
                status("Draft policies", "5", Some("awaiting review"), Tone::Pending),
                status("Outdated content", "3", Some("> 12 months old"), Tone::Critical),
                status("Scheduled updates", "2", Some("next week"), Tone::Positive),
            ],
            activity: vec![
                activity(
                    "Sarah Johnson updated 'Per Diem Rates – Europe'",
                    "2 hours ago",
                ),
                activity(
                    "You published 'New Visa Requirements 2026'",
                    "Yesterday, 3:45 PM",
                ),
                activity("Michael Chen added FAQ about baggage policies", "2 days ago"),
            ],
            reminders: [
                "Annual travel policy review due: March 15",
                "Update per diem rates (quarterly)",
                "Travel insurance policy expires: April 30",
            ]
            .into_iter()
            .map(|text| ReminderEntry {
                text: text.to_string(),
            })
            .collect(),
            suggestions: [
                "15 users asked about remote work + travel policies — Consider adding guidance",
                "Per diem questions increased 40% — Rates may need clarification",
                "Frequent confusion about pre-approval thresholds",
            ]
            .into_iter()
            .map(|text| Suggestion {
                text: text.to_string(),
            })
            .collect(),
            topics: vec![
                topic("Visas & Documentation", 35, "#002244"),
                topic("Per Diem & Expenses", 28, "#336699"),
                topic("Booking Procedures", 22, "#4A90D9"),
                topic("Other", 15, "#94A3B8"),
            ],
            resources: [
                (Icon::BookOpen, "Admin User Guide"),
                (Icon::Video, "How to Update Policies"),
                (Icon::Phone, "Contact IT Support"),
                (Icon::Mail, "Submit Content Request"),
            ]
            .into_iter()
            .map(|(icon, label)| ResourceLink {
                icon,
                label: label.to_string(),
            })
            .collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("dashboard data is unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the dashboard dataset.
///
/// A live support-center data service would implement this; the dashboard ships
/// [`FixedDataSource`] and [`DataFileSource`].
pub trait DataSource {
    fn load(&self) -> Result<Dataset, DataError>;
}

/// Serves [`Dataset::fixed`]. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedDataSource;

impl DataSource for FixedDataSource {
    fn load(&self) -> Result<Dataset, DataError> {
        Ok(Dataset::fixed())
    }
}

/// Reads a [`Dataset`] from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct DataFileSource {
    path: PathBuf,
}

impl DataFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for DataFileSource {
    fn load(&self) -> Result<Dataset, DataError> {
        debug!("loading dashboard data from {}", self.path.display());
        let unavailable = |e: &dyn std::fmt::Display| {
            DataError::Unavailable(format!("{}: {}", self.path.display(), e))
        };
        let contents = fs::read_to_string(&self.path).map_err(|e| unavailable(&e))?;
        serde_json::from_str(&contents).map_err(|e| unavailable(&e))
    }
}

/// The configured data file, or the built-in dataset when none is set.
pub fn data_source(data_file: Option<&Path>) -> Box<dyn DataSource> {
    match data_file {
        Some(path) => Box::new(DataFileSource::new(path)),
        None => Box::new(FixedDataSource),
    }
}
