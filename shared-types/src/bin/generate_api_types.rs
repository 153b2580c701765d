use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Ledger types
    types.push(clean_type(TransactionType::export_to_string()?));
    types.push(clean_type(RecordSource::export_to_string()?));
    types.push(clean_type(FinancialRecordCandidate::export_to_string()?));
    types.push(clean_type(FinancialRecord::export_to_string()?));
    types.push(clean_type(CreateExpenseRequest::export_to_string()?));
    types.push(clean_type(FinancialRecordsResponse::export_to_string()?));
    types.push(clean_type(ExtractTextRequest::export_to_string()?));
    types.push(clean_type(ExtractTextResponse::export_to_string()?));
    types.push(clean_type(CategoriesResponse::export_to_string()?));
    types.push(clean_type(FinancialSummary::export_to_string()?));
    types.push(clean_type(CategoryBreakdown::export_to_string()?));

    // Chat types
    types.push(clean_type(MessageSender::export_to_string()?));
    types.push(clean_type(ChatMessage::export_to_string()?));
    types.push(clean_type(ChatTurnRequest::export_to_string()?));
    types.push(clean_type(ChatTurnOutcome::export_to_string()?));
    types.push(clean_type(ChatMessagesResponse::export_to_string()?));

    // Profile types
    types.push(clean_type(UserProfile::export_to_string()?));
    types.push(clean_type(UpdateProfileRequest::export_to_string()?));

    // Settings types
    types.push(clean_type(ExtractorSettings::export_to_string()?));
    types.push(clean_type(SettingsResponse::export_to_string()?));

    let output_dir = Path::new("../web/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Types that reference other types (ChatTurnOutcome -> FinancialRecord) carry imports
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
