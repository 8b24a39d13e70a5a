use super::mapping::AppMapping;

/// Defines the built-in capability table and the function that materializes it.
///
/// Each row is `(key, zapier, n8n, make)`; write `-` for a platform that has
/// no equivalent integration.
macro_rules! define_app_mappings {
    (@id -) => { None };
    (@id $id:literal) => { Some($id) };
    ( $( ($key:expr, $zapier:tt, $n8n:tt, $make:tt) ),* $(,)? ) => {
        /// The capability keys of the built-in table, in table order.
        pub const DEFAULT_CAPABILITIES: &[&str] = &[ $( $key ),* ];

        /// Materializes the built-in table, in table order.
        pub(super) fn default_mappings() -> Vec<(&'static str, AppMapping)> {
            vec![
                $( (
                    $key,
                    AppMapping::new(
                        define_app_mappings!(@id $zapier),
                        define_app_mappings!(@id $n8n),
                        define_app_mappings!(@id $make),
                    ),
                ), )*
            ]
        }
    };
}

define_app_mappings! {
    // Email
    ("gmail", "gmail", "n8n-nodes-base.gmail", "google-email:ActionSendEmail"),
    ("outlook", "outlook", "n8n-nodes-base.microsoftOutlook", "microsoft-email:ActionSendEmail"),
    ("mailchimp", "mailchimp", "n8n-nodes-base.mailchimp", "mailchimp:ActionAddSubscriber"),
    ("sendgrid", "sendgrid", "n8n-nodes-base.sendGrid", "sendgrid:sendEmail"),

    // Messaging
    ("slack", "slack", "n8n-nodes-base.slack", "slack:CreateMessage"),
    ("discord", "discord", "n8n-nodes-base.discord", "discord:createMessage"),
    ("telegram", "telegram", "n8n-nodes-base.telegram", "telegram:SendReplyMessage"),
    ("twilio", "twilio", "n8n-nodes-base.twilio", "twilio:sendSms"),

    // CRM
    ("salesforce", "salesforce", "n8n-nodes-base.salesforce", "salesforce:createRecord"),
    ("hubspot", "hubspot", "n8n-nodes-base.hubspot", "hubspotcrm:createContact"),
    ("pipedrive", "pipedrive", "n8n-nodes-base.pipedrive", "pipedrive:createDeal"),

    // Project management
    ("trello", "trello", "n8n-nodes-base.trello", "trello:ActionCreateCard"),
    ("asana", "asana", "n8n-nodes-base.asana", "asana:createTask"),
    ("jira", "jira", "n8n-nodes-base.jira", "jira:createIssue"),
    ("notion", "notion", "n8n-nodes-base.notion", "notion:createDatabaseItem"),

    // Storage
    ("google-drive", "google-drive", "n8n-nodes-base.googleDrive", "google-drive:uploadFile"),
    ("dropbox", "dropbox", "n8n-nodes-base.dropbox", "dropbox:uploadFile"),

    // Spreadsheets and databases
    ("airtable", "airtable", "n8n-nodes-base.airtable", "airtable:ActionCreateRecord"),
    ("google-sheets", "google-sheets", "n8n-nodes-base.googleSheets", "google-sheets:addRow"),

    // HTTP. Zapier serves both through "Webhooks by Zapier".
    ("webhook", "webhook", "n8n-nodes-base.webhook", "gateway:CustomWebHook"),
    ("http", "webhook", "n8n-nodes-base.httpRequest", "http:ActionSendData"),

    // Code execution
    ("code", "code", "n8n-nodes-base.code", -),

    // AI
    ("openai", "openai", "@n8n/n8n-nodes-langchain.openAi", "openai-gpt-3:CreateCompletion"),
}
