use crate::error::ChartResult;
use crate::render::{CompiledOption, OptionRenderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the option so tests can catch malformed output before
/// a real engine binding is involved.
#[derive(Debug, Default)]
pub struct NullOptionRenderer {
    pub last_series_count: usize,
    pub set_option_calls: usize,
    pub clear_calls: usize,
    pub last_option: Option<CompiledOption>,
}

impl OptionRenderer for NullOptionRenderer {
    fn set_option(&mut self, option: &CompiledOption) -> ChartResult<()> {
        option.validate()?;
        self.last_series_count = option.series.len();
        self.set_option_calls += 1;
        self.last_option = Some(option.clone());
        Ok(())
    }

    fn clear(&mut self) {
        self.clear_calls += 1;
        self.last_series_count = 0;
        self.last_option = None;
    }
}
