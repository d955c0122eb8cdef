use crate::errors::AppResult;
use crate::models::ChecklistCatalog;
use crate::utils::table::Table;

/// Print the checklist in display order.
pub fn handle() -> AppResult<()> {
    let headers = ["#".to_string(), "item".to_string(), "target".to_string()];
    let rows = ChecklistCatalog::items()
        .iter()
        .enumerate()
        .map(|(i, it)| {
            vec![
                (i + 1).to_string(),
                it.name.to_string(),
                it.target_range.to_string(),
            ]
        })
        .collect();

    print!("{}", Table::fitted(&headers, rows).render(false));
    Ok(())
}
