use super::*;

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            share_prefix: DEFAULT_SHARE_PREFIX.to_owned(),
        }
    }
}

impl LaunchOptions {
    /// Resolves the initial URI from `--uri`, then the `uri` parameter of the
    /// first `--location` that carries one, then `env_uri`, then the built-in default.
    pub(super) fn resolve(
        args: impl IntoIterator<Item = String>,
        env_uri: Option<String>,
    ) -> SchemeResult<Self> {
        let mut explicit_uri = None;
        let mut location_uri = None;
        let mut share_prefix = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--uri" => explicit_uri = Some(flag_value(&mut args, "--uri")?),
                "--location" => {
                    let location = flag_value(&mut args, "--location")?;
                    match sb_uri::uri_from_location(&location) {
                        Some(uri) => location_uri = location_uri.or(Some(uri)),
                        None => tracing::warn!(%location, "location carries no uri parameter"),
                    }
                }
                "--share-prefix" => {
                    share_prefix = Some(flag_value(&mut args, "--share-prefix")?);
                }
                other => {
                    return Err(SchemeError::new(
                        "config.arg.unknown",
                        format!(
                            "unsupported argument `{other}` (expected: --uri|--location|--share-prefix)"
                        ),
                    ));
                }
            }
        }

        let mut options = Self::default();
        if let Some(initial_uri) = explicit_uri.or(location_uri).or(env_uri) {
            options.editor = EditorConfig::with_initial_uri(initial_uri);
        }
        if let Some(share_prefix) = share_prefix {
            options.share_prefix = share_prefix;
        }

        Ok(options)
    }

    pub(super) fn from_process() -> SchemeResult<Self> {
        Self::resolve(std::env::args().skip(1), std::env::var(URI_ENV_VAR).ok())
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> SchemeResult<String> {
    args.next().ok_or_else(|| {
        SchemeError::new(
            "config.arg.missing_value",
            format!("missing value after {flag}"),
        )
    })
}
