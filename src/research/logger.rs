use colored::Colorize;

use crate::{
    Booster,
    CurrentStatus,
    Result,
    WeakLearner,
};

use std::time::Instant;
use std::ops::ControlFlow;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Struct `Logger` runs a boosting algorithm
/// and prints the training loss, validation loss,
/// ensemble size and running time
/// every `print_every` rounds.
///
/// # Example
/// ```no_run
/// use tinygbm::prelude::*;
/// use tinygbm::research::Logger;
///
/// let train = Sample::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
/// let valid = Sample::from_csv("valid.csv", true)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
///
/// let booster = GBM::init(&train, &valid)
///     .n_estimators(100);
/// let tree = RegressionTreeBuilder::new()
///     .max_depth(3)
///     .build()
///     .unwrap();
///
/// let (ensemble, history) = Logger::new(booster, &tree)
///     .print_every(10)
///     .run()
///     .unwrap();
/// ```
pub struct Logger<'a, B, W> {
    booster: B,
    weak_learner: &'a W,
    round: Option<usize>,
}


impl<'a, B, W> Logger<'a, B, W> {
    /// Create a new instance of `Logger`.
    /// By default, `Logger` prints nothing.
    pub fn new(booster: B, weak_learner: &'a W) -> Self {
        Self { booster, weak_learner, round: None, }
    }


    /// Set the interval to print the current status.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = Some(round).filter(|&r| r > 0);
        self
    }


    /// Same as [`Logger::print_every`], taking an `Option`.
    #[inline(always)]
    pub fn print_every_opt(mut self, round: Option<usize>) -> Self {
        self.round = round.filter(|&r| r > 0);
        self
    }


    /// Returns the booster.
    pub fn into_booster(self) -> B {
        self.booster
    }
}


impl<H, B, W, O> Logger<'_, B, W>
    where B: Booster<H, Output = O> + CurrentStatus,
          W: WeakLearner<Hypothesis = H>,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "TRAIN".bold().green(),
            "VALID.".bold().yellow(),
            "# OF".bold().blue(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "LOSS".bold().green(),
            "LOSS".bold().yellow(),
            "HYPO.".bold().blue(),
            "TIME".bold().cyan(),
        );
    }


    fn print_info(key: &str, info: Option<Vec<(&str, String)>>, name: &str) {
        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            key.bold(),
            name.bold().green(),
        );
        if let Some(info) = info {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        println!(
            "\n{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        Self::print_info(
            "Booster", self.booster.info(), self.booster.name(),
        );
        Self::print_info(
            "Weak Learner", self.weak_learner.info(), self.weak_learner.name(),
        );
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    fn print_row(&self, tag: &str, iter: usize, time_acc: u128) {
        let train = self.booster.train_loss();
        let valid = match self.booster.valid_loss() {
            Some(loss) => format!("{:>WIDTH$.PREC_WIDTH$}", loss),
            None => format!("{:>WIDTH$}", "-"),
        };
        let n_hypotheses = self.booster.n_hypotheses();
        println!(
            "{} {}\t\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", iter).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
            valid.yellow(),
            format!("{:>WIDTH$}", n_hypotheses).blue(),
            time_format(time_acc).bold().cyan(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run(&mut self) -> Result<O> {
        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;

        if self.round.is_some() {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        let flow = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = match self.booster.boost(self.weak_learner, iter) {
                Ok(flow) => flow,
                Err(e) => return ControlFlow::Break(Err(e)),
            };

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            if let Some(round) = self.round {
                if flow.is_break() {
                    let tag = "[FIN]".bold().bright_green().to_string();
                    self.print_row(&tag, iter, time_acc);
                    println!();
                } else if iter % round == 0 {
                    let tag = "[LOG]".bold().magenta().to_string();
                    self.print_row(&tag, iter, time_acc);
                }
            }

            match flow {
                ControlFlow::Continue(()) => ControlFlow::Continue(()),
                ControlFlow::Break(_) => ControlFlow::Break(Ok(())),
            }
        });
        if let ControlFlow::Break(result) = flow {
            result?;
        }

        self.booster.postprocess()
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::time_format;

    #[test]
    fn formats_each_unit() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(12_345), " 12.345s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(3_725_000), " 01h 02m");
    }
}
