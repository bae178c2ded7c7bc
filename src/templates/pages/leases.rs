use crate::domain::LeaseRecord;
use crate::templates::page_layout;
use maud::{html, Markup};

const LEASES_CSS: &str = r#"
body {
  font-family: sans-serif;
  margin: 20px;
}
table {
  border-collapse: collapse;
  width: 100%;
}
th, td {
  padding: 8px 12px;
  border-bottom: 1px solid #ccc;
}
th {
  background: #f0f0f0;
  text-align: left;
}
a {
  color: #007bff;
}
"#;

/// The raw lease roster behind the map: one row per lease record, including
/// leases whose booth labels never match the layout.
pub fn leases_page(property_name: &str, records: &[LeaseRecord]) -> Markup {
    let title = format!("{property_name} Lease Data");

    page_layout(
        &title,
        LEASES_CSS,
        html! {
            h1 { (title) }
            p { a href="/" { "Back to map" } }

            @if records.is_empty() {
                p { "No active leases found." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Lease ID" }
                            th { "Occupant" }
                            th { "End" }
                            th { "Location" }
                            th { "Balance" }
                        }
                    }
                    tbody {
                        @for r in records {
                            tr {
                                td { (r.lease_id) }
                                td { (r.occupant_name) }
                                td { (lease_end_text(r)) }
                                td { (r.location) }
                                td { (format!("${:.2}", r.balance)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn lease_end_text(record: &LeaseRecord) -> String {
    record
        .lease_end
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
