use serde::Deserialize;

pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNKNOWN_MESSAGE: &str = "No commit message";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

const DATE_KEY_LEN: usize = 10;
const SHORT_SHA_LEN: usize = 7;

/// One commit as returned by the commit-listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub commit: Option<CommitDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitDetails {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A commit with every placeholder already resolved, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry<'a> {
    pub date_key: &'a str,
    pub message: &'a str,
    pub author: &'a str,
    pub short_sha: &'a str,
    pub url: Option<&'a str>,
}

impl CommitEntry<'_> {
    /// Message with runs of whitespace (newlines included) collapsed to one space.
    pub fn single_line_message(&self) -> String {
        self.message.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl CommitRecord {
    pub fn entry(&self) -> CommitEntry<'_> {
        let author = self.commit.as_ref().and_then(|c| c.author.as_ref());

        CommitEntry {
            date_key: self.date_key(),
            message: self
                .commit
                .as_ref()
                .and_then(|c| c.message.as_deref())
                .unwrap_or(UNKNOWN_MESSAGE),
            author: author
                .and_then(|a| a.name.as_deref())
                .unwrap_or(UNKNOWN_AUTHOR),
            short_sha: prefix(self.sha.as_deref().unwrap_or_default(), SHORT_SHA_LEN),
            url: self.html_url.as_deref().filter(|url| !url.is_empty()),
        }
    }

    /// Calendar-date prefix of the author timestamp, or [`UNKNOWN_DATE`].
    pub fn date_key(&self) -> &str {
        self.commit
            .as_ref()
            .and_then(|c| c.author.as_ref())
            .and_then(|a| a.date.as_deref())
            .map(|date| prefix(date, DATE_KEY_LEN))
            .unwrap_or(UNKNOWN_DATE)
    }
}

fn prefix(value: &str, chars: usize) -> &str {
    match value.char_indices().nth(chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn commit(sha: &str, date: Option<&str>, message: Option<&str>) -> CommitRecord {
        CommitRecord {
            sha: Some(sha.to_string()),
            html_url: Some(format!("https://github.com/acme/widgets/commit/{sha}")),
            commit: Some(CommitDetails {
                message: message.map(str::to_string),
                author: Some(CommitAuthor {
                    name: Some("Ann".to_string()),
                    date: date.map(str::to_string),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_date_key_from_timestamp() {
        let record = fixtures::commit("abc", Some("2024-03-05T10:00:00Z"), Some("msg"));
        assert_eq!(record.date_key(), "2024-03-05");
    }

    #[test]
    fn short_timestamp_is_used_whole() {
        let record = fixtures::commit("abc", Some("2024"), Some("msg"));
        assert_eq!(record.date_key(), "2024");
    }

    #[test]
    fn applies_placeholders_for_missing_fields() {
        let record: CommitRecord = serde_json::from_str(r#"{"sha": "abcdef1234567"}"#).unwrap();
        let entry = record.entry();

        assert_eq!(entry.date_key, UNKNOWN_DATE);
        assert_eq!(entry.message, UNKNOWN_MESSAGE);
        assert_eq!(entry.author, UNKNOWN_AUTHOR);
        assert_eq!(entry.short_sha, "abcdef1");
        assert_eq!(entry.url, None);
    }

    #[test]
    fn treats_null_fields_as_absent() {
        let record: CommitRecord = serde_json::from_str(
            r#"{"sha": null, "html_url": null,
                "commit": {"message": null, "author": {"name": null, "date": null}}}"#,
        )
        .unwrap();
        let entry = record.entry();

        assert_eq!(entry.message, UNKNOWN_MESSAGE);
        assert_eq!(entry.author, UNKNOWN_AUTHOR);
        assert_eq!(entry.date_key, UNKNOWN_DATE);
        assert_eq!(entry.short_sha, "");
    }

    #[test]
    fn empty_url_counts_as_missing() {
        let mut record = fixtures::commit("abc", None, None);
        record.html_url = Some(String::new());
        assert_eq!(record.entry().url, None);
    }

    #[test]
    fn keeps_empty_message_verbatim() {
        let record = fixtures::commit("abc", None, Some(""));
        assert_eq!(record.entry().message, "");
    }

    #[test]
    fn collapses_message_whitespace() {
        let record = fixtures::commit("abc", None, Some("Fix  bug\n here"));
        assert_eq!(record.entry().single_line_message(), "Fix bug here");
    }

    #[test]
    fn parses_github_commit_payload() {
        let payload = r#"{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b",
            "commit": {
                "message": "Fix all the bugs",
                "author": {"name": "Monalisa Octocat", "email": "m@github.com", "date": "2011-04-14T16:00:49Z"},
                "committer": {"name": "Monalisa Octocat", "date": "2011-04-14T16:00:49Z"}
            },
            "parents": []
        }"#;
        let record: CommitRecord = serde_json::from_str(payload).unwrap();
        let entry = record.entry();

        assert_eq!(entry.date_key, "2011-04-14");
        assert_eq!(entry.author, "Monalisa Octocat");
        assert_eq!(entry.short_sha, "6dcb09b");
        assert_eq!(
            entry.url,
            Some("https://github.com/octocat/Hello-World/commit/6dcb09b")
        );
    }
}
