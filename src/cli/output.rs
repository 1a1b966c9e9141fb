use anyhow::Result;
use lookahead::SearchOutcome;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')\n", outcome.query);
	}

	match &outcome.result {
		Some(record) => format!("{}\n\n{}\n", record.title, record.description),
		None => format!("No policy found for '{}'\n", outcome.query),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use lookahead::LookupRecord;
	use serde_json::Value;

	use super::*;

	fn accepted() -> SearchOutcome {
		SearchOutcome {
			accepted: true,
			query: "vacation".into(),
			result: Some(LookupRecord::new("Vacation Policy", "Employees accrue...")),
		}
	}

	#[test]
	fn json_format_uses_wire_field_names() {
		let json = format_outcome_json(&accepted()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["result"]["policy"], "Vacation Policy");
		assert_eq!(value["result"]["description"], "Employees accrue...");
	}

	#[test]
	fn json_format_has_null_result_when_nothing_matched() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "xyz".into(),
			result: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert!(value["result"].is_null());
	}

	#[test]
	fn plain_format_prints_title_then_description() {
		assert_eq!(
			format_outcome_plain(&accepted()),
			"Vacation Policy\n\nEmployees accrue...\n"
		);
	}

	#[test]
	fn plain_format_reports_cancellation() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "sick".into(),
			result: None,
		};
		assert_eq!(
			format_outcome_plain(&outcome),
			"Search cancelled (query: 'sick')\n"
		);
	}
}
