//! Numerical parameters for a run.

/// Runtime settings for the fixed-step driving loop.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated time (s)
    pub h0: f64,    // step size dt (s), > 0
}
