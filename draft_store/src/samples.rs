use async_trait::async_trait;

use crate::{DraftRecord, HistorySource, StoreError};

/// Fixed drafts shown when no storage endpoint is configured.
#[derive(Clone, Debug)]
pub struct SampleHistory {
    records: Vec<DraftRecord>,
}

impl SampleHistory {
    pub fn new(records: Vec<DraftRecord>) -> Self {
        SampleHistory { records }
    }
}

impl Default for SampleHistory {
    fn default() -> Self {
        SampleHistory::new(
            SAMPLES
                .iter()
                .map(|(purpose, tone, details, draft)| DraftRecord {
                    purpose: Some(purpose.to_string()),
                    tone: Some(tone.to_string()),
                    details: Some(details.to_string()),
                    draft: draft.to_string(),
                })
                .collect(),
        )
    }
}

#[async_trait]
impl HistorySource for SampleHistory {
    async fn list(&self) -> Result<Vec<DraftRecord>, StoreError> {
        Ok(self.records.clone())
    }
}

// (purpose, tone, details, draft)
const SAMPLES: [(&str, &str, &str, &str); 3] = [
    (
        "Follow-up on job application",
        "Formal",
        "I interviewed last week for the Product Manager role and wanted to follow up on the status of my application.",
        "Subject: Follow-Up on Product Manager Job Application

Dear [Hiring Manager's Name],

I hope this email finds you well. I wanted to follow up on my application for the Product Manager position and inquire about any updates regarding the status of my candidacy. I greatly enjoyed our conversation during the interview on [date] and am very enthusiastic about the opportunity to contribute to [Company Name].

Please let me know if there is any additional information I can provide to assist in your decision-making process. I look forward to hearing from you soon.

Best regards,
[Your Full Name]
",
    ),
    (
        "Request for meeting reschedule",
        "Casual",
        "I need to reschedule our team sync meeting planned for Monday due to a conflict with another engagement.",
        "Subject: Request to Reschedule Monday's Meeting

Hi Team,

I hope you're all doing well! I wanted to reach out to let you know that I have a scheduling conflict with our team sync on Monday. Would it be possible to move it to Tuesday or another time that works for everyone?

Let me know your availability, and I\u{2019}ll do my best to accommodate. Thanks for your understanding!

Best,
[Your Name]
",
    ),
    (
        "Introduce a new product to a client",
        "Persuasive",
        "We have launched a new AI-powered tool that streamlines customer support, and I believe it could greatly benefit their operations.",
        "Subject: Enhance Your Customer Support with Our New AI Tool

Dear [Client's Name],

I\u{2019}m excited to share with you our latest innovation: an AI-powered tool designed to streamline customer support processes and elevate your service efficiency. This tool has already helped organizations like [Example Company] reduce response times by 30% and improve customer satisfaction.

I\u{2019}d love to schedule a quick call to discuss how this tool could be customized to meet your specific needs. Are you available for a 15-minute chat this week? Let me know a time that works for you.

Looking forward to your response.

Best regards,
[Your Name]
",
    ),
];
