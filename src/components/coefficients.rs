use serde::{Deserialize, Serialize};

/// Dimensionless longitudinal stability coefficients at the trim point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalCoefficients {
    /// Drag coefficient at null incidence (Cd0).
    pub c_d_0: f64,
    /// Drag coefficient gradient with respect to Mach number (CdM).
    pub c_d_mach: f64,
    /// Linear drag gradient with respect to angle of attack (CdAlpha).
    pub c_d_alpha: f64,
    /// Lift coefficient at null incidence (Cl0).
    pub c_l_0: f64,
    /// Lift coefficient gradient with respect to Mach number (ClM).
    pub c_l_mach: f64,
    /// Linear lift gradient with respect to angle of attack (ClAlpha).
    pub c_l_alpha: f64,
    /// Lift coefficient with respect to angle of attack rate (ClAlphaDot).
    pub c_l_alpha_dot: f64,
    /// Lift coefficient with respect to pitch rate (ClQ).
    pub c_l_q: f64,
    /// Pitching moment gradient with respect to angle of attack (CmAlpha).
    pub c_m_alpha: f64,
    /// Pitching moment coefficient with respect to angle of attack rate (CmAlphaDot).
    pub c_m_alpha_dot: f64,
    /// Pitching moment gradient with respect to Mach number (CmM).
    pub c_m_mach: f64,
    /// Pitching moment coefficient with respect to pitch rate (CmQ).
    pub c_m_q: f64,
}

/// Dimensionless longitudinal control coefficients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalControlCoefficients {
    /// Lift coefficient with respect to throttle setting (ClDeltaT).
    pub c_l_delta_t: f64,
    /// Lift coefficient with respect to elevator deflection (ClDeltaE).
    pub c_l_delta_e: f64,
    /// Pitching moment coefficient with respect to throttle setting (CmDeltaT).
    pub c_m_delta_t: f64,
    /// Pitching moment coefficient with respect to elevator deflection (CmDeltaE).
    pub c_m_delta_e: f64,
}

/// Dimensionless lateral-directional stability coefficients at the trim point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralDirectionalCoefficients {
    /// Side-force coefficient due to sideslip angle (CyBeta).
    pub c_y_beta: f64,
    /// Side-force coefficient due to roll rate (CyP).
    pub c_y_p: f64,
    /// Side-force coefficient due to yaw rate (CyR).
    pub c_y_r: f64,
    /// Roll moment coefficient due to sideslip angle (ClBeta).
    pub c_l_beta: f64,
    /// Roll moment coefficient due to roll rate (ClP).
    pub c_l_p: f64,
    /// Roll moment coefficient due to yaw rate (ClR).
    pub c_l_r: f64,
    /// Yaw moment coefficient due to sideslip angle (CnBeta).
    pub c_n_beta: f64,
    /// Yaw moment coefficient due to roll rate (CnP).
    pub c_n_p: f64,
    /// Yaw moment coefficient due to yaw rate (CnR).
    pub c_n_r: f64,
}

/// Dimensionless lateral-directional control coefficients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralDirectionalControlCoefficients {
    /// Side-force coefficient due to aileron deflection (CyDeltaA).
    pub c_y_delta_a: f64,
    /// Side-force coefficient due to rudder deflection (CyDeltaR).
    pub c_y_delta_r: f64,
    /// Roll moment coefficient due to aileron deflection (ClDeltaA).
    pub c_l_delta_a: f64,
    /// Roll moment coefficient due to rudder deflection (ClDeltaR).
    pub c_l_delta_r: f64,
    /// Yaw moment coefficient due to aileron deflection (CnDeltaA).
    pub c_n_delta_a: f64,
    /// Yaw moment coefficient due to rudder deflection (CnDeltaR).
    pub c_n_delta_r: f64,
}

impl LongitudinalCoefficients {
    pub fn twin_otter() -> Self {
        Self {
            c_d_0: 0.108,
            c_d_mach: 0.0,
            c_d_alpha: 0.138,
            c_l_0: 0.215,
            c_l_mach: 0.0,
            c_l_alpha: 4.370,
            c_l_alpha_dot: 2.70,
            c_l_q: 25.05,
            c_m_alpha: -1.419,
            c_m_alpha_dot: -9.31,
            c_m_mach: 0.0,
            c_m_q: -27.95,
        }
    }
}

impl LongitudinalControlCoefficients {
    pub fn twin_otter() -> Self {
        Self {
            c_l_delta_t: 0.0,
            c_l_delta_e: 0.291,
            c_m_delta_t: 0.0,
            c_m_delta_e: -1.626,
        }
    }
}

impl LateralDirectionalCoefficients {
    pub fn twin_otter() -> Self {
        Self {
            c_y_beta: -0.885,
            c_y_p: -0.090,
            c_y_r: 1.697,
            c_l_beta: -0.112,
            c_l_p: -0.413,
            c_l_r: 0.191,
            c_n_beta: 0.088,
            c_n_p: -0.043,
            c_n_r: -0.426,
        }
    }
}

impl LateralDirectionalControlCoefficients {
    pub fn twin_otter() -> Self {
        Self {
            c_y_delta_a: -0.051,
            c_y_delta_r: -0.193,
            c_l_delta_a: 0.206,
            c_l_delta_r: 0.116,
            c_n_delta_a: 0.023,
            c_n_delta_r: -0.087,
        }
    }
}
