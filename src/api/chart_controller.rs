use tracing::{debug, trace};

use crate::core::{ChartData, ChartType};
use crate::error::ChartResult;
use crate::render::{CompiledOption, OptionRenderer};

use super::{ChartProps, DEFAULT_EMPTY_TEXT, compile};

/// What a host component should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartView<'a> {
    Loading,
    Empty { text: &'a str },
    Ready(&'a CompiledOption),
}

impl<'a> ChartView<'a> {
    /// Loading wins over everything; a missing option is the empty state.
    #[must_use]
    pub fn resolve(
        loading: bool,
        option: Option<&'a CompiledOption>,
        empty_text: Option<&'a str>,
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        match option {
            Some(option) => Self::Ready(option),
            None => Self::Empty {
                text: empty_text
                    .filter(|text| !text.is_empty())
                    .unwrap_or(DEFAULT_EMPTY_TEXT),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CompileInputs {
    chart_type: ChartType,
    data: Option<ChartData>,
    props: ChartProps,
}

/// Reference adapter: recompiles only when its inputs change and forwards
/// the result to an [`OptionRenderer`].
#[derive(Debug)]
pub struct ChartController<R: OptionRenderer> {
    renderer: R,
    inputs: Option<CompileInputs>,
    option: Option<CompiledOption>,
    loading: bool,
    compile_count: usize,
}

impl<R: OptionRenderer> ChartController<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            inputs: None,
            option: None,
            loading: false,
            compile_count: 0,
        }
    }

    /// Applies new inputs. Returns `Ok(false)` when they equal the previous
    /// ones and nothing was recompiled.
    ///
    /// On error the previous inputs and option are kept.
    pub fn update(
        &mut self,
        chart_type: ChartType,
        data: Option<&ChartData>,
        props: &ChartProps,
    ) -> ChartResult<bool> {
        let unchanged = self.inputs.as_ref().is_some_and(|inputs| {
            inputs.chart_type == chart_type
                && match (inputs.data.as_ref(), data) {
                    (Some(previous), Some(next)) => previous.same_as(next),
                    (None, None) => true,
                    _ => false,
                }
                && &inputs.props == props
        });
        if unchanged {
            trace!(family = %chart_type, "inputs unchanged; skip compile");
            return Ok(false);
        }

        let option = compile(chart_type, data, props)?;
        self.compile_count += 1;
        match &option {
            Some(option) => self.renderer.set_option(option)?,
            None => self.renderer.clear(),
        }
        debug!(
            family = %chart_type,
            compiles = self.compile_count,
            empty = option.is_none(),
            "chart controller updated"
        );

        self.option = option;
        self.inputs = Some(CompileInputs {
            chart_type,
            data: data.cloned(),
            props: props.clone(),
        });
        Ok(true)
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn view(&self) -> ChartView<'_> {
        let empty_text = self
            .inputs
            .as_ref()
            .map(|inputs| inputs.props.empty_text.as_str());
        ChartView::resolve(self.loading, self.option.as_ref(), empty_text)
    }

    #[must_use]
    pub fn option(&self) -> Option<&CompiledOption> {
        self.option.as_ref()
    }

    /// Number of compiles performed so far.
    #[must_use]
    pub fn compile_count(&self) -> usize {
        self.compile_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
