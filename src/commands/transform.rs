use crate::cli::{OutputFormat, TransformArgs};
use crate::config::Config;
use crate::core::data::Enhancement;
use crate::core::traits::PromptTransformer;
use crate::utils::{
    handle_flow, join_request_words, prompt_input, sanitize_request, validate_request, FlowResult,
    OutputStyle,
};
use anyhow::{Context, Result};

pub fn handle_transform_command(
    transformer: &impl PromptTransformer,
    config: &Config,
    args: &TransformArgs,
) -> Result<()> {
    let raw = if args.request.is_empty() {
        prompt_input("Request: ")?
    } else {
        join_request_words(&args.request)
    };

    if raw.trim().is_empty() {
        handle_flow(FlowResult::Cancelled("No request given".to_string()));
        return Ok(());
    }

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?,
    };

    let output = transform_request(transformer, config, args, &raw)?;
    match format {
        OutputFormat::Text => println!("{}", output.transformed_prompt),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialize enhancement to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Validate (unless disabled), sanitize and enhance a single request
fn transform_request(
    transformer: &impl PromptTransformer,
    config: &Config,
    args: &TransformArgs,
    raw: &str,
) -> Result<Enhancement> {
    if config.general.validate && !args.no_validate {
        validate_request(raw, &config.limits)?;
    }

    let request = sanitize_request(raw);
    let enhancement = transformer.enhance(&request);

    if args.explain {
        OutputStyle::print_explanation(&enhancement);
    }

    Ok(enhancement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enhancer::PromptEnhancer;
    use crate::utils::AppError;

    fn args(no_validate: bool) -> TransformArgs {
        TransformArgs {
            request: Vec::new(),
            format: None,
            no_validate,
            explain: false,
        }
    }

    #[test]
    fn test_transform_request_validates_by_default() {
        let enhancer = PromptEnhancer::builtin();
        let err = transform_request(&enhancer, &Config::default(), &args(false), "hi").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AppError>(),
            Some(&AppError::Validation("Request too short (min 3 characters)".to_string()))
        );
    }

    #[test]
    fn test_transform_request_skips_validation_when_asked() {
        let enhancer = PromptEnhancer::builtin();
        let enhancement =
            transform_request(&enhancer, &Config::default(), &args(true), "hi").unwrap();
        assert!(enhancement.transformed_prompt.starts_with("hi.\n\n"));

        let mut config = Config::default();
        config.general.validate = false;
        assert!(transform_request(&enhancer, &config, &args(false), "hi").is_ok());
    }

    #[test]
    fn test_transform_request_sanitizes_before_enhancing() {
        let enhancement = transform_request(
            &PromptEnhancer::builtin(),
            &Config::default(),
            &args(true),
            "  fix the javascript:login flow ",
        )
        .unwrap();

        assert_eq!(enhancement.original_request, "fix the login flow");
        assert_eq!(enhancement.domain, "auth");
    }
}
