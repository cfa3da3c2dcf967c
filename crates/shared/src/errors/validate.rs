use validator::ValidationErrors;

/// Flattens validator output into `field: message` lines, sorted by field name.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = match &err.message {
                    Some(m) => m.to_string(),
                    None => match err.code.as_ref() {
                        "length" => "invalid length".to_string(),
                        "range" => "value out of range".to_string(),
                        "required" => "required".to_string(),
                        _ => "invalid value".to_string(),
                    },
                };
                format!("{field}: {message}")
            })
        })
        .collect();

    if messages.is_empty() {
        vec!["validation failed".to_string()]
    } else {
        messages
    }
}
