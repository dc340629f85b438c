use crate::config::{
    parse_timestamp, DEFAULT_GRANULARITY_MINUTES, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START,
};
use crate::domain::model::SlotWindow;
use crate::domain::ports::ScheduleConfigProvider;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "slotbook")]
#[command(about = "Interview slot booking engine")]
pub struct CliConfig {
    /// Start of the booking window (RFC 3339)
    #[arg(long, default_value = DEFAULT_WINDOW_START)]
    pub window_start: String,

    /// End of the booking window (RFC 3339), exclusive
    #[arg(long, default_value = DEFAULT_WINDOW_END)]
    pub window_end: String,

    /// Slot width in minutes; must divide 60
    #[arg(long, default_value_t = DEFAULT_GRANULARITY_MINUTES)]
    pub granularity_minutes: u32,

    /// Webhook endpoint notified on each successful booking
    #[arg(long)]
    pub notify_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ScheduleConfigProvider for CliConfig {
    fn window(&self) -> Result<SlotWindow> {
        let start = parse_timestamp("window_start", &self.window_start)?;
        let end = parse_timestamp("window_end", &self.window_end)?;
        SlotWindow::new(start, end, self.granularity_minutes)
    }

    fn notify_endpoint(&self) -> Option<&str> {
        self.notify_url.as_deref()
    }
}
