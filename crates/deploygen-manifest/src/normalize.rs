//! Turns the raw `--labels`, `--envs` and `--replicas` strings into typed values.
//!
//! Absent or blank input is `None`, never an empty collection.

use deploygen_common::{debug, error::FormatError};

use crate::k8s::{EnvList, EnvVar, LabelSet};

const LABEL_DELIMITER: char = ',';
const ENV_DELIMITER: char = ';';

/// Parses `key=value,key=value`. Later duplicates overwrite earlier values.
pub fn parse_labels(raw: Option<&str>) -> Result<Option<LabelSet>, FormatError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut labels = LabelSet::new();
    for pair in pairs(raw, LABEL_DELIMITER) {
        let (key, value) = split_pair(pair).ok_or_else(|| FormatError::Label(pair.to_string()))?;
        labels.insert(key.to_string(), value.to_string());
    }
    debug!("parsed {} label(s)", labels.len());

    Ok(Some(labels).filter(|labels| !labels.is_empty()))
}

/// Parses `KEY=VALUE;KEY=VALUE`, keeping order and duplicates.
pub fn parse_envs(raw: Option<&str>) -> Result<Option<EnvList>, FormatError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let envs = pairs(raw, ENV_DELIMITER)
        .map(|pair| {
            split_pair(pair)
                .map(|(name, value)| EnvVar::new(name, value))
                .ok_or_else(|| FormatError::Env(pair.to_string()))
        })
        .collect::<Result<EnvList, _>>()?;
    debug!("parsed {} env var(s)", envs.len());

    Ok(Some(envs).filter(|envs| !envs.is_empty()))
}

/// Parses a replica count. Blank input means "use the default".
pub fn parse_replicas(raw: Option<&str>) -> Result<Option<i32>, FormatError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<i32>() {
        Ok(replicas) if replicas >= 0 => Ok(Some(replicas)),
        _ => Err(FormatError::Replicas(raw.to_string())),
    }
}

fn pairs(raw: &str, delimiter: char) -> impl Iterator<Item = &str> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
}

// Splits on the first `=` only.
fn split_pair(pair: &str) -> Option<(&str, &str)> {
    pair.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> LabelSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::whitespace(Some("   "))]
    #[case::only_commas(Some(" , ,, "))]
    fn labels_blank_input_is_none(#[case] raw: Option<&str>) {
        assert_eq!(parse_labels(raw).unwrap(), None);
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::only_semicolons(Some(";; ; "))]
    fn envs_blank_input_is_none(#[case] raw: Option<&str>) {
        assert_eq!(parse_envs(raw).unwrap(), None);
    }

    #[test]
    fn labels_are_trimmed_and_ordered() {
        let parsed = parse_labels(Some(" tier = web , team=x,")).unwrap().unwrap();
        assert_eq!(parsed, labels(&[("tier", "web"), ("team", "x")]));
        assert_eq!(
            parsed.keys().collect::<Vec<_>>(),
            vec!["tier", "team"],
            "insertion order must survive"
        );
    }

    #[test]
    fn label_value_may_contain_equals() {
        let parsed = parse_labels(Some("query=a=b")).unwrap().unwrap();
        assert_eq!(parsed, labels(&[("query", "a=b")]));
    }

    #[test]
    fn later_label_wins() {
        let parsed = parse_labels(Some("env=dev,team=x,env=prod")).unwrap().unwrap();
        assert_eq!(parsed, labels(&[("env", "prod"), ("team", "x")]));
        assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["env", "team"]);
    }

    #[test]
    fn label_without_equals_fails() {
        let err = parse_labels(Some("team=x,foo")).unwrap_err();
        assert_eq!(err, FormatError::Label("foo".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("'foo'"), "{msg}");
        assert!(msg.contains("key=value"), "{msg}");
    }

    #[test]
    fn envs_keep_order_and_duplicates() {
        let parsed = parse_envs(Some("A=1; B = 2 ;A=3")).unwrap().unwrap();
        assert_eq!(
            parsed,
            vec![
                EnvVar::new("A", "1"),
                EnvVar::new("B", "2"),
                EnvVar::new("A", "3"),
            ]
        );
    }

    #[test]
    fn env_value_may_be_empty_or_contain_equals() {
        let parsed = parse_envs(Some("EMPTY=;OPTS=-Dx=y")).unwrap().unwrap();
        assert_eq!(
            parsed,
            vec![EnvVar::new("EMPTY", ""), EnvVar::new("OPTS", "-Dx=y")]
        );
    }

    #[test]
    fn env_without_equals_fails() {
        let err = parse_envs(Some("foo")).unwrap_err();
        assert_eq!(err, FormatError::Env("foo".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("'foo'"), "{msg}");
        assert!(msg.contains("KEY=VALUE"), "{msg}");
    }

    #[test]
    fn commas_do_not_split_envs() {
        let parsed = parse_envs(Some("HOSTS=a,b")).unwrap().unwrap();
        assert_eq!(parsed, vec![EnvVar::new("HOSTS", "a,b")]);
    }

    #[rstest]
    #[case::absent(None, None)]
    #[case::empty(Some(""), None)]
    #[case::blank(Some("  "), None)]
    #[case::zero(Some("0"), Some(0))]
    #[case::five(Some("5"), Some(5))]
    #[case::padded(Some(" 7 "), Some(7))]
    fn replicas_accepted(#[case] raw: Option<&str>, #[case] expected: Option<i32>) {
        assert_eq!(parse_replicas(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::word("three")]
    #[case::negative("-1")]
    #[case::fraction("1.5")]
    #[case::overflow("99999999999")]
    fn replicas_rejected(#[case] raw: &str) {
        let err = parse_replicas(Some(raw)).unwrap_err();
        assert_eq!(err, FormatError::Replicas(raw.to_string()));
    }
}
