//! Enum domains shared by the built-in options
//!
//! Order here is declaration order; the registry moves each option's default
//! to the front when it is built.

pub(super) const REGIME: &[&str] = &["COMPRESSIBLE", "INCOMPRESSIBLE", "FREESURFACE"];

pub(super) const SOLVER: &[&str] = &[
    "NO_SOLVER",
    "EULER",
    "NAVIER_STOKES",
    "RANS",
    "TNE2_EULER",
    "TNE2_NAVIER_STOKES",
    "ADJ_EULER",
    "ADJ_NAVIER_STOKES",
    "ADJ_RANS",
    "LIN_EULER",
    "POISSON_EQUATION",
    "WAVE_EQUATION",
    "HEAT_EQUATION",
    "LINEAR_ELASTICITY",
    "FLUID_STRUCTURE_EULER",
    "FLUID_STRUCTURE_NAVIER_STOKES",
    "FLUID_STRUCTURE_RANS",
];

pub(super) const MATH_PROBLEM: &[&str] = &["DIRECT", "ADJOINT", "LINEARIZED", "ONE_SHOT_ADJOINT"];

pub(super) const TURB_MODEL: &[&str] = &["NONE", "SA", "SA_COMP", "SST", "ML"];

pub(super) const TRANS_MODEL: &[&str] = &["NONE", "LM"];

pub(super) const INLET_TYPE: &[&str] = &["TOTAL_CONDITIONS", "MASS_FLOW"];

pub(super) const ADAPTATION: &[&str] = &[
    "NONE",
    "FULL",
    "FULL_FLOW",
    "GRAD_FLOW",
    "FULL_ADJOINT",
    "GRAD_ADJOINT",
    "GRAD_FLOW_ADJ",
    "ROBUST",
    "FULL_LINEAR",
    "COMPUTABLE",
    "COMPUTABLE_ROBUST",
    "REMAINING",
    "WAKE",
    "SMOOTHING",
    "SUPERSONIC_SHOCK",
    "TWOPHASE",
];

pub(super) const SURFACE_DEF: &[&str] = &[
    "NONE",
    "NACA0012_AIRFOIL",
    "NACA4412_AIRFOIL",
    "BIPARABOLIC",
    "CYLINDER",
];

pub(super) const UNSTEADY: &[&str] = &[
    "NO",
    "TIME_STEPPING",
    "DUAL_TIME_STEPPING-1ST_ORDER",
    "DUAL_TIME_STEPPING-2ND_ORDER",
    "TIME_SPECTRAL",
];

pub(super) const TIME_DISCRE: &[&str] =
    &["RUNGE-KUTTA_EXPLICIT", "EULER_IMPLICIT", "EULER_EXPLICIT"];

pub(super) const LINEAR_SOLVER: &[&str] = &[
    "STEEPEST_DESCENT",
    "NEWTON",
    "QUASI_NEWTON",
    "CONJUGATE_GRADIENT",
    "FGMRES",
    "RESTARTED_FGMRES",
    "BCGSTAB",
    "SMOOTHER_JACOBI",
    "SMOOTHER_ILU",
    "SMOOTHER_LUSGS",
    "SMOOTHER_LINELET",
];

pub(super) const PRECONDITIONER: &[&str] = &["JACOBI", "LU_SGS", "LINELET", "ILU"];

pub(super) const GRID_MOVEMENT: &[&str] = &[
    "NO_MOVEMENT",
    "DEFORMING",
    "RIGID_MOTION",
    "FLUTTER",
    "EXTERNAL",
    "EXTERNAL_ROTATION",
    "AEROELASTIC",
    "AEROELASTIC_RIGID_MOTION",
    "ROTATING_FRAME",
    "ELASTICITY",
    "MOVING_WALL",
    "STEADY_TRANSLATION",
];

pub(super) const GUST_TYPE: &[&str] = &["NONE", "TOP_HAT", "SINE", "ONE_M_COSINE", "VORTEX", "EOG"];

pub(super) const GUST_DIR: &[&str] = &["Y_DIR", "X_DIR"];

pub(super) const CONV_CRITERIA: &[&str] = &["RESIDUAL", "CAUCHY"];

pub(super) const OBJECTIVE: &[&str] = &[
    "DRAG",
    "LIFT",
    "SIDEFORCE",
    "MOMENT_X",
    "MOMENT_Y",
    "MOMENT_Z",
    "EFFICIENCY",
    "EQUIVALENT_AREA",
    "NEARFIELD_PRESSURE",
    "FORCE_X",
    "FORCE_Y",
    "FORCE_Z",
    "THRUST",
    "TORQUE",
    "FIGURE_OF_MERIT",
    "FREE_SURFACE",
    "TOTAL_HEATFLUX",
    "MAXIMUM_HEATFLUX",
];

pub(super) const SENSITIVITY: &[&str] = &["SENS_GEOMETRY", "SENS_MACH"];

pub(super) const LINEARIZED: &[&str] = &["DELTA_DRAG", "DELTA_LIFT"];

pub(super) const GRADIENT: &[&str] = &["GREEN_GAUSS", "WEIGHTED_LEAST_SQUARES"];

pub(super) const CONVECTIVE: &[&str] = &[
    "NONE",
    "JST",
    "JST_KE",
    "LAX-FRIEDRICH",
    "CUSP",
    "ROE",
    "ROE_TURKEL_2ND",
    "AUSM",
    "HLLC",
    "MSW",
    "SCALAR_UPWIND",
    "CONVECTIVE_TEMPLATE",
];

pub(super) const VISCOUS: &[&str] = &["NONE", "AVG_GRAD", "AVG_GRAD_CORRECTED", "GALERKIN"];

pub(super) const SOURCE: &[&str] =
    &["NONE", "PIECEWISE_CONSTANT", "CHARGE_DIST", "TEMPLATE_SOLVER"];

pub(super) const LIMITER: &[&str] = &[
    "VENKATAKRISHNAN",
    "BARTH_JESPERSEN",
    "MINMOD",
    "SHARP_EDGES",
    "SOLID_WALL_DISTANCE",
];

pub(super) const GEO_MODE: &[&str] = &["FUNCTION", "GRADIENT"];

pub(super) const SENS_SMOOTHING: &[&str] = &["NONE", "SOBOLEV", "BIGRID"];

pub(super) const CONTINUOUS_EQNS: &[&str] = &["EULER", "NAVIER_STOKES"];

pub(super) const DISCRETE_EQNS: &[&str] = &["NONE", "SA", "SST"];

pub(super) const OUTPUT_FORMAT: &[&str] = &[
    "TECPLOT",
    "TECPLOT_BINARY",
    "PARAVIEW",
    "FIELDVIEW",
    "FIELDVIEW_BINARY",
    "CGNS",
    "SOLUTION",
];

pub(super) const MESH_FORMAT: &[&str] = &["SU2", "CGNS", "NETCDF_ASCII"];

pub(super) const GAS_MODEL: &[&str] = &["ARGON", "AIR-7", "AIR-5", "N2", "ONESPECIES", "ARGON-SID"];

pub(super) const DESIGN_VARIABLE: &[&str] = &[
    "NO_DEFORMATION",
    "FFD_SETTING",
    "FFD_CONTROL_POINT",
    "FFD_DIHEDRAL_ANGLE",
    "FFD_TWIST_ANGLE",
    "FFD_ROTATION",
    "FFD_CAMBER",
    "FFD_THICKNESS",
    "FFD_VOLUME",
    "HICKS_HENNE",
    "COSINE_BUMP",
    "SPHERICAL",
    "NACA_4DIGITS",
    "DISPLACEMENT",
    "ROTATION",
    "PARABOLIC",
    "OBSTACLE",
    "AIRFOIL",
    "SURFACE_FILE",
];
