//! Category names and write order of the built-in table

use crate::category::Category;

pub(super) const PROBLEM: &str = "Problem Definition";
pub(super) const MARKERS: &str = "Boundary Markers";
pub(super) const ADAPT: &str = "Grid adaptation";
pub(super) const TIME: &str = "Time-marching";
pub(super) const LINEAR: &str = "Linear solver definition";
pub(super) const MOTION: &str = "Dynamic mesh definition";
pub(super) const GUST: &str = "Wind Gust";
pub(super) const CONVERGENCE: &str = "Convergence";
pub(super) const MULTIGRID: &str = "Multi-grid";
pub(super) const SPATIAL: &str = "Spatial Discretization";
pub(super) const CONV_FLOW: &str = "Convect Option:  CONV_NUM_METHOD_FLOW";
pub(super) const CONV_ADJ: &str = "Convect Option:  CONV_NUM_METHOD_ADJ";
pub(super) const CONV_TURB: &str = "Convect Option:  CONV_NUM_METHOD_TURB";
pub(super) const CONV_ADJTURB: &str = "Convect Option:  CONV_NUM_METHOD_ADJTURB";
pub(super) const CONV_LIN: &str = "Convect Option:  CONV_NUM_METHOD_LIN";
pub(super) const CONV_ADJLEVELSET: &str = "Convect Option:  CONV_NUM_METHOD_ADJLEVELSET";
pub(super) const CONV_TNE2: &str = "Convect Option:  CONV_NUM_METHOD_TNE2";
pub(super) const CONV_ADJTNE2: &str = "Convect Option:  CONV_NUM_METHOD_ADJTNE2";
pub(super) const ADJOINT: &str = "Adjoint and Gradient";
pub(super) const IO: &str = "Input/output files and formats";
pub(super) const EQUIV_AREA: &str = "Equivalent Area";
pub(super) const FREESTREAM: &str = "Freestream Conditions";
pub(super) const REFERENCE: &str = "Reference Conditions";
pub(super) const REACTING: &str = "Reacting Flow";
pub(super) const FREE_SURFACE: &str = "Free surface simulation";
pub(super) const DEFORMATION: &str = "Grid deformation";
pub(super) const ROTORCRAFT: &str = "Rotorcraft problem";
pub(super) const FEA: &str = "FEA solver";
pub(super) const WAVE: &str = "Wave solver";
pub(super) const HEAT: &str = "Heat solver";
pub(super) const ML_TURB: &str = "ML Turb Options";

/// Categories of the built-in table in write order
pub static CATEGORIES: &[Category] = &[
    Category::new(PROBLEM, "Governing equations, regime and restart"),
    Category::new(MARKERS, "Boundary condition markers"),
    Category::new(ADAPT, "Mesh adaptation"),
    Category::new(TIME, "Time integration and CFL control"),
    Category::new(LINEAR, "Krylov solvers and preconditioners"),
    Category::new(MOTION, "Mesh motion for unsteady simulations"),
    Category::new(GUST, ""),
    Category::new(CONVERGENCE, "Convergence criteria"),
    Category::new(MULTIGRID, "Agglomeration multigrid"),
    Category::new(SPATIAL, "Gradients and limiters"),
    Category::new(CONV_FLOW, "Flow equations"),
    Category::new(CONV_ADJ, "Adjoint flow equations"),
    Category::new(CONV_TURB, "Turbulence model"),
    Category::new(CONV_ADJTURB, "Adjoint turbulence model"),
    Category::new(CONV_LIN, "Linearized flow equations"),
    Category::new(CONV_ADJLEVELSET, "Adjoint level set"),
    Category::new(CONV_TNE2, "Two-temperature non-equilibrium flow"),
    Category::new(CONV_ADJTNE2, "Adjoint two-temperature non-equilibrium flow"),
    Category::new(ADJOINT, "Objective function and sensitivities"),
    Category::new(IO, ""),
    Category::new(EQUIV_AREA, "Near-field equivalent area"),
    Category::new(FREESTREAM, "Free-stream state"),
    Category::new(REFERENCE, "Non-dimensionalization reference values"),
    Category::new(REACTING, "Gas chemistry"),
    Category::new(FREE_SURFACE, ""),
    Category::new(DEFORMATION, "Design variables and mesh deformation"),
    Category::new(ROTORCRAFT, ""),
    Category::new(FEA, "Structural analysis"),
    Category::new(WAVE, ""),
    Category::new(HEAT, ""),
    Category::new(ML_TURB, "Learned turbulence model"),
];
