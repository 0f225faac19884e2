//! Output formatting utilities

use crate::domain::DataValidator;

/// Format the validator catalog for display
pub fn format_validator_list(validators: &[DataValidator]) -> String {
    let mut output = String::new();
    for validator in validators {
        output.push_str(&format!("{:<15}  {}\n", validator.name(), validator.reference()));
    }
    output
}

/// Format a batch of tags, one per line
pub fn format_tag_list(tags: &[String]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}
