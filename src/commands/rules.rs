use crate::cli::{RulesArgs, RulesFormat};
use crate::config::Config;
use crate::core::data::{DomainRule, RuleSet};
use crate::core::traits::RuleSource;
use crate::utils::format::heavy_rule;
use crate::utils::pagination::print_maybe_paged;
use crate::utils::{handle_flow, FlowResult, OutputStyle};
use anyhow::{Context, Result};

pub fn handle_rules_command(
    source: &impl RuleSource,
    config: &Config,
    args: &RulesArgs,
) -> Result<()> {
    let Some(domains) = select_domains(source, args.domain.as_deref()) else {
        handle_flow(FlowResult::NotFound {
            item_type: "Domain".to_string(),
            search_term: args.domain.clone().unwrap_or_default(),
        });
        return Ok(());
    };

    match args.format {
        RulesFormat::Simple => print_simple(&domains),
        RulesFormat::Detailed => {
            let content = format_detailed(source.rules(), &domains, args.domain.is_none());
            print_maybe_paged(&content, config.general.pager)?;
        }
        RulesFormat::Json => {
            let json = match args.domain {
                Some(_) => serde_json::to_string_pretty(&domains),
                None => serde_json::to_string_pretty(source.rules()),
            };
            let json = json.context("Failed to serialize rules to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// The named domain, or every domain with the fallback last. `None` for an unknown name.
fn select_domains<'s>(
    source: &'s impl RuleSource,
    name: Option<&str>,
) -> Option<Vec<&'s DomainRule>> {
    match name {
        Some(name) => source.find_domain(name).map(|domain| vec![domain]),
        None => Some(source.rules().all_domains().collect()),
    }
}

fn print_simple(domains: &[&DomainRule]) {
    OutputStyle::print_header(&format!("📚 Domain Rules ({})", domains.len()));
    for domain in domains {
        println!("{}", OutputStyle::format_domain_line(domain));
    }
}

/// Detailed listing; the complexity table is included only for the full listing
fn format_detailed(rules: &RuleSet, domains: &[&DomainRule], with_complexity: bool) -> String {
    let mut sections: Vec<String> = Vec::new();

    if with_complexity {
        sections.push(OutputStyle::format_complexity_table(rules));
    }
    for domain in domains {
        sections.push(OutputStyle::format_domain_detailed(domain));
    }

    sections.join(&format!("\n{}\n", OutputStyle::muted(&heavy_rule())))
}
