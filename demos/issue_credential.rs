//! Issue a single credential and print the receipt.
//!
//! ```bash
//! DOCWAL_API_KEY=docwal_live_xxxxx cargo run --example issue_credential
//! ```

use docwal_client::credentials::IssueCredentialRequest;
use docwal_client::{CredentialData, DocWalClient, DocWalConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DocWalClient::new(DocWalConfig::from_env()?)?;

    let mut data = CredentialData::new();
    data.insert("student_name".into(), "John Doe".into());
    data.insert("degree".into(), "Bachelor of Science".into());
    data.insert("major".into(), "Computer Science".into());
    data.insert("graduation_date".into(), "2024-05-15".into());
    data.insert("gpa".into(), "3.8".into());
    data.insert("honors".into(), "Cum Laude".into());

    let issued = client
        .credentials()
        .issue(&IssueCredentialRequest::new(
            "template-123",
            "student@example.com",
            data,
        ))
        .await?;

    println!("credential issued");
    println!("  doc_id:      {}", issued.doc_id);
    println!(
        "  hash:        {}",
        issued.document_hash.as_deref().unwrap_or("-")
    );
    println!(
        "  claim token: {}",
        issued.claim_token.as_deref().unwrap_or("-")
    );

    Ok(())
}
