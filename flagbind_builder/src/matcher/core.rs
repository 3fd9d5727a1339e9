use crate::constant::*;
use crate::matcher::api::Namespace;
use crate::matcher::model::{RawValues, Scan};
use crate::model::Behaviors;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Strip the leading dashes off a flag token.
/// Returns `None` for a positional token.
///
/// One or two dashes are treated identically: `-name` and `--name` are the same flag.
pub(crate) fn flag_body(token: &str) -> Option<&str> {
    token
        .strip_prefix(LONG_PREFIX)
        .or_else(|| token.strip_prefix(SHORT_PREFIX))
}

/// Single pass tokenizer which groups the raw values of each flag under its canonical name.
pub(crate) struct TokenScanner<'n> {
    namespace: &'n Namespace,
    behaviors: Behaviors,
}

impl<'n> TokenScanner<'n> {
    pub(crate) fn new(namespace: &'n Namespace, behaviors: Behaviors) -> Self {
        Self {
            namespace,
            behaviors,
        }
    }

    pub(crate) fn scan(&self, tokens: &[impl AsRef<str>]) -> Scan {
        let mut scan = Scan::default();
        let mut index = 0;

        while let Some(token) = tokens.get(index) {
            let token = token.as_ref();

            // 1. Positional tokens pass straight through.
            let Some(body) = flag_body(token) else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{token}' is positional.");
                }

                self.pass_through(&mut scan, token);
                index += 1;
                continue;
            };

            // 2. Split off an inline value, on the first '=' only.
            let (candidate, inline) = match body.split_once(VALUE_SEPARATOR) {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };

            // 3. Resolve aliases; unknown flags never consume a value.
            let Some(name) = self.namespace.resolve(candidate) else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Token '{token}' does not match any flag.");
                }

                scan.unknown.push(candidate.to_string());
                self.pass_through(&mut scan, token);
                index += 1;
                continue;
            };

            let values: &mut RawValues = scan.matches.entry(name.to_string()).or_default();

            // 4. Attach the value: inline, the next positional token, or nothing at all.
            match inline {
                Some(value) => {
                    values.push(candidate, value);
                    index += 1;
                }
                None => match tokens.get(index + 1).map(AsRef::as_ref) {
                    Some(next) if flag_body(next).is_none() => {
                        values.push(candidate, next);
                        index += 2;
                    }
                    _ => {
                        values.push(candidate, "");
                        index += 1;
                    }
                },
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' matches flag '{name}' (via '{candidate}').");
            }
        }

        if self.behaviors.read_only {
            scan.remaining = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        }

        scan
    }

    fn pass_through(&self, scan: &mut Scan, token: &str) {
        if !self.behaviors.read_only {
            scan.remaining.push(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use rstest::rstest;
    use std::collections::HashMap;

    fn namespace() -> Namespace {
        let mut namespace = Namespace::default();
        namespace
            .insert("flag", &["no-flag".to_string()])
            .unwrap();
        namespace.insert("value", &[]).unwrap();
        namespace
    }

    fn matches(values: Vec<(&str, Vec<(&str, &str)>)>) -> HashMap<String, RawValues> {
        values
            .into_iter()
            .map(|(name, raw)| (name.to_string(), raw.into_iter().collect()))
            .collect()
    }

    #[rstest]
    #[case("--flag", Some("flag"))]
    #[case("-flag", Some("flag"))]
    #[case("---flag", Some("-flag"))]
    #[case("--flag=1", Some("flag=1"))]
    #[case("--", Some(""))]
    #[case("-", Some(""))]
    #[case("flag", None)]
    #[case("", None)]
    #[case("a-b", None)]
    fn flag_bodies(#[case] token: &str, #[case] expected: Option<&str>) {
        assert_eq!(flag_body(token), expected);
    }

    #[rstest]
    #[case(vec![], vec![], vec![])]
    #[case(vec!["a", "b"], vec!["a", "b"], vec![])]
    #[case(vec!["--value=hello"], vec![], vec![("value", vec![("value", "hello")])])]
    #[case(vec!["-value=hello"], vec![], vec![("value", vec![("value", "hello")])])]
    #[case(vec!["--value=a=b"], vec![], vec![("value", vec![("value", "a=b")])])]
    #[case(vec!["--value="], vec![], vec![("value", vec![("value", "")])])]
    #[case(vec!["--value", "hello"], vec![], vec![("value", vec![("value", "hello")])])]
    #[case(vec!["--value", "hello", "world"], vec!["world"], vec![("value", vec![("value", "hello")])])]
    #[case(vec!["a", "--value", "hello", "b"], vec!["a", "b"], vec![("value", vec![("value", "hello")])])]
    #[case(vec!["--value"], vec![], vec![("value", vec![("value", "")])])]
    #[case(vec!["--value", "--flag"], vec![], vec![("value", vec![("value", "")]), ("flag", vec![("flag", "")])])]
    #[case(vec!["--value", "-5"], vec!["-5"], vec![("value", vec![("value", "")])])]
    #[case(vec!["--no-flag", "--flag"], vec![], vec![("flag", vec![("no-flag", ""), ("flag", "")])])]
    #[case(vec!["--flag", "x", "--no-flag=true"], vec![], vec![("flag", vec![("flag", "x"), ("no-flag", "true")])])]
    #[case(vec!["--value=1", "--value", "2"], vec![], vec![("value", vec![("value", "1"), ("value", "2")])])]
    #[case(vec!["--unknown", "hello"], vec!["--unknown", "hello"], vec![])]
    #[case(vec!["--unknown=1", "--value", "2"], vec!["--unknown=1"], vec![("value", vec![("value", "2")])])]
    #[case(vec!["--Value=1"], vec!["--Value=1"], vec![])]
    fn scan(
        #[case] tokens: Vec<&str>,
        #[case] expected_remaining: Vec<&str>,
        #[case] expected_matches: Vec<(&str, Vec<(&str, &str)>)>,
    ) {
        // Setup
        let namespace = namespace();
        let scanner = TokenScanner::new(&namespace, Behaviors::default());

        // Execute
        let scan = scanner.scan(tokens.as_slice());

        // Verify
        assert_eq!(scan.remaining, expected_remaining);
        assert_eq!(scan.matches, matches(expected_matches));
    }

    #[rstest]
    #[case(vec!["--unknown"], vec!["unknown"])]
    #[case(vec!["-x=1", "--value", "1", "--y", "z"], vec!["x", "y"])]
    #[case(vec!["--", "-"], vec!["", ""])]
    #[case(vec!["--value", "--flag", "positional"], vec![])]
    fn scan_unknown(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let namespace = namespace();
        let scanner = TokenScanner::new(&namespace, Behaviors::default());

        // Execute
        let scan = scanner.scan(tokens.as_slice());

        // Verify
        assert_eq!(scan.unknown, expected);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["a"])]
    #[case(vec!["--value", "hello", "world"])]
    #[case(vec!["--unknown", "--flag", "--value=1"])]
    fn scan_read_only(#[case] tokens: Vec<&str>) {
        // Setup
        let namespace = namespace();
        let behaviors = Behaviors {
            strict: false,
            read_only: true,
        };
        let scanner = TokenScanner::new(&namespace, behaviors);

        // Execute
        let scan = scanner.scan(tokens.as_slice());

        // Verify
        assert_eq!(scan.remaining, tokens);
    }

    #[test]
    fn scan_owned_tokens() {
        // Setup
        let namespace = namespace();
        let scanner = TokenScanner::new(&namespace, Behaviors::default());
        let tokens = vec!["--value".to_string(), "1".to_string(), "2".to_string()];

        // Execute
        let scan = scanner.scan(&tokens);

        // Verify
        assert_eq!(scan.remaining, vec!["2"]);
        assert_eq!(scan.matches, matches(vec![("value", vec![("value", "1")])]));
    }

    #[test]
    fn scan_positionals_random() {
        // Setup
        let namespace = namespace();
        let scanner = TokenScanner::new(&namespace, Behaviors::default());

        for _ in 0..100 {
            let length = thread_rng().gen_range(0..10);
            let tokens: Vec<String> = (0..length)
                .map(|_| {
                    let size = thread_rng().gen_range(1..8);
                    thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(size)
                        .map(char::from)
                        .collect()
                })
                .collect();

            // Execute
            let scan = scanner.scan(&tokens);

            // Verify
            // Alphanumeric tokens never look like flags, so they all pass through in order.
            assert_eq!(scan.remaining, tokens);
            assert!(scan.matches.is_empty());
            assert!(scan.unknown.is_empty());
        }
    }
}
