//! The stopping rule on validation losses.
use std::collections::VecDeque;
use std::ops::ControlFlow;


/// Early stopping over a window of the last `K` validation losses.
///
/// The window starts with `K` copies of `+inf`.
/// A loss strictly below the window minimum slides the window;
/// any other loss stops the fit for good.
#[derive(Clone, Debug, PartialEq)]
pub enum EarlyStopping {
    /// Never stops.
    Disabled,

    /// Stops on the first loss that does not beat the window.
    Enabled {
        /// The last `K` losses, oldest first.
        window: VecDeque<f64>,
        /// Terminal state.
        stopped: bool,
    },
}


impl EarlyStopping {
    /// `None` gives [`EarlyStopping::Disabled`].
    pub fn new(rounds: Option<usize>) -> Self {
        match rounds {
            None => Self::Disabled,
            Some(k) => Self::Enabled {
                window: std::iter::repeat(f64::INFINITY).take(k).collect(),
                stopped: false,
            },
        }
    }


    /// Returns `true` if a window is kept.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }


    /// Returns `true` once the rule has fired.
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Enabled { stopped: true, .. })
    }


    /// The current window, oldest first.
    pub fn window(&self) -> Option<&VecDeque<f64>> {
        match self {
            Self::Disabled => None,
            Self::Enabled { window, .. } => Some(window),
        }
    }


    /// Feed the loss of the current round.
    pub fn update(&mut self, loss: f64) -> ControlFlow<()> {
        let Self::Enabled { window, stopped } = self else {
            return ControlFlow::Continue(());
        };

        if *stopped {
            return ControlFlow::Break(());
        }

        let min = window.iter()
            .copied()
            .fold(f64::INFINITY, f64::min);

        if loss < min {
            window.pop_front();
            window.push_back(loss);
            ControlFlow::Continue(())
        } else {
            *stopped = true;
            ControlFlow::Break(())
        }
    }
}
