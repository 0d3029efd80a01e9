//! The built-in option declarations

use super::categories::*;
use super::domains::*;
use crate::compound::{CompoundPlugin, InletList, ParamList, PeriodicList, StringDoubleList};

const DV_PARAM: CompoundPlugin = CompoundPlugin::new::<ParamList>("DV_PARAM");
const INLET_FIXED: CompoundPlugin = CompoundPlugin::new::<ParamList>("INLET_FIXED");
const ACTUATOR_DISK: CompoundPlugin = CompoundPlugin::new::<ParamList>("ACTUATOR_DISK");
const PAIRS: CompoundPlugin = CompoundPlugin::new::<StringDoubleList>("STRING_DOUBLE_LIST");
const INLET: CompoundPlugin = CompoundPlugin::new::<InletList>("INLET");
const PERIODIC: CompoundPlugin = CompoundPlugin::new::<PeriodicList>("PERIODIC");

option_table! {
    PROBLEM {
        RegimeType = "REGIME_TYPE", enumeration(REGIME, "COMPRESSIBLE"), "Regime type";
        ExtraOutput = "EXTRA_OUTPUT", boolean(false), "Write extra output";
        PhysicalProblem = "PHYSICAL_PROBLEM", enumeration(SOLVER, "NO_SOLVER"), "Physical governing equations";
        MathProblem = "MATH_PROBLEM", enumeration(MATH_PROBLEM, "DIRECT"), "Mathematical problem";
        KindTurbModel = "KIND_TURB_MODEL", enumeration(TURB_MODEL, "NONE"), "Specify turbulence model";
        KindTransModel = "KIND_TRANS_MODEL", enumeration(TRANS_MODEL, "NONE"), "Specify transition model";
        Axisymmetric = "AXISYMMETRIC", boolean(false), "Axisymmetric simulation";
        GravityForce = "GRAVITY_FORCE", boolean(false), "Add the gravity force";
        LowFidelitySimulation = "LOW_FIDELITY_SIMULATION", boolean(false), "Perform a low fidelity simulation";
        RestartSol = "RESTART_SOL", boolean(false), "Restart solution from native solution file";
        VisualizePart = "VISUALIZE_PART", boolean(false), "Write a tecplot file for each partition";
    }
    ML_TURB {
        MlTurbModelFile = "ML_TURB_MODEL_FILE", string("none"), "Location of the turb model itself";
        MlTurbModelCheckFile = "ML_TURB_MODEL_CHECK_FILE", string("none"), "Location of the check for the proper loading of the turbulence model";
    }
    MARKERS {
        MarkerPlotting = "MARKER_PLOTTING", string_array("NONE"), "Marker(s) of the surface in the surface flow solution file";
        MarkerMonitoring = "MARKER_MONITORING", string_array("NONE"), "Marker(s) of the surface where evaluate the non-dimensional coefficients";
        MarkerDesigning = "MARKER_DESIGNING", string_array("NONE"), "Marker(s) of the surface where objective function (design problem) will be evaluated";
        MarkerEuler = "MARKER_EULER", string_array("NONE"), "Euler wall boundary marker(s)";
        MarkerFar = "MARKER_FAR", string_array("NONE"), "Far-field boundary marker(s)";
        MarkerSym = "MARKER_SYM", string_array("NONE"), "Symmetry boundary marker(s)";
        MarkerPressure = "MARKER_PRESSURE", string_array("NONE"), "Pressure boundary marker(s)";
        MarkerNearfield = "MARKER_NEARFIELD", string_array("NONE"), "Near-Field boundary marker(s)";
        MarkerInterface = "MARKER_INTERFACE", string_array("NONE"), "Zone interface boundary marker(s)";
        MarkerDirichlet = "MARKER_DIRICHLET", string_array("NONE"), "Dirichlet boundary marker(s)";
        MarkerNeumann = "MARKER_NEUMANN", string_array("NONE"), "Neumann boundary marker(s)";
        ElecDirichlet = "ELEC_DIRICHLET", compound(PAIRS), "Poisson dirichlet boundary marker(s)";
        ElecNeumann = "ELEC_NEUMANN", compound(PAIRS), "Poisson neumann boundary marker(s)";
        MarkerCustom = "MARKER_CUSTOM", string_array("NONE"), "Custom boundary marker(s)";
        MarkerPeriodic = "MARKER_PERIODIC", compound(PERIODIC), "Periodic boundary marker(s)";
        InletType = "INLET_TYPE", enumeration(INLET_TYPE, "TOTAL_CONDITIONS"), "Inlet boundary type";
        MarkerInlet = "MARKER_INLET", compound(INLET), "Inlet boundary marker(s)";
        MarkerSupersonicInlet = "MARKER_SUPERSONIC_INLET", compound(INLET_FIXED), "Supersonic inlet boundary marker(s)";
        MarkerOutlet = "MARKER_OUTLET", compound(PAIRS), "Outlet boundary marker(s) with back pressure";
        MarkerIsothermal = "MARKER_ISOTHERMAL", compound(PAIRS), "Isothermal wall marker(s) with wall temperature";
        MarkerHeatflux = "MARKER_HEATFLUX", compound(PAIRS), "Heat flux wall marker(s) with wall heat flux";
        MarkerNacelleInflow = "MARKER_NACELLE_INFLOW", compound(PAIRS), "Nacelle inflow marker(s) with fan face Mach";
        SubsonicNacelleInflow = "SUBSONIC_NACELLE_INFLOW", boolean(false), "Engine subsonic intake region";
        MarkerNacelleExhaust = "MARKER_NACELLE_EXHAUST", compound(INLET_FIXED), "Nacelle exhaust marker(s) with total conditions";
        MarkerActdisk = "MARKER_ACTDISK", compound(ACTUATOR_DISK), "Actuator disk boundary marker(s)";
        MarkerNormalDispl = "MARKER_NORMAL_DISPL", compound(PAIRS), "Displacement boundary marker(s)";
        MarkerNormalLoad = "MARKER_NORMAL_LOAD", compound(PAIRS), "Load boundary marker(s)";
        MarkerFlowload = "MARKER_FLOWLOAD", compound(PAIRS), "Flow load boundary marker(s)";
        DampNacelleInflow = "DAMP_NACELLE_INFLOW", scalar("0.1"), "Damping factor for engine inlet condition";
    }
    ADAPT {
        KindAdapt = "KIND_ADAPT", enumeration(ADAPTATION, "NONE"), "Kind of grid adaptation";
        NewElems = "NEW_ELEMS", scalar("-1"), "Percentage of new elements (% of the original number of elements)";
        DualvolPower = "DUALVOL_POWER", scalar("0.5"), "Scale factor for the dual volume";
        AnalyticalSurfdef = "ANALYTICAL_SURFDEF", enumeration(SURFACE_DEF, "NONE"), "Use analytical definition for surfaces";
        SmoothGeometry = "SMOOTH_GEOMETRY", boolean(false), "Before each computation, implicitly smooth the nodal coordinates";
        AdaptBoundary = "ADAPT_BOUNDARY", boolean(true), "Adapt the boundary elements";
        DivideElements = "DIVIDE_ELEMENTS", boolean(false), "Divide rectangles into triangles";
    }
    TIME {
        UnsteadySimulation = "UNSTEADY_SIMULATION", enumeration(UNSTEADY, "NO"), "Unsteady simulation";
        UnsteadyFarfield = "UNSTEADY_FARFIELD", boolean(false), "Unsteady farfield boundaries";
        CflNumber = "CFL_NUMBER", scalar("1.25"), "Courant-Friedrichs-Lewy condition of the finest grid";
        CflRamp = "CFL_RAMP", fixed_floats(3, "( 1.0, 100.0, 1.0 )"), "CFL ramp (factor, number of iterations, CFL limit)";
        AdjCflReduction = "ADJ_CFL_REDUCTION", scalar("0.8"), "Reduction factor of the CFL coefficient in the adjoint problem";
        TurbCflReduction = "TURB_CFL_REDUCTION", scalar("1.0"), "Reduction factor of the CFL coefficient in the turbulent problem";
        AdjturbCflReduction = "ADJTURB_CFL_REDUCTION", scalar("0.8"), "Reduction factor of the CFL coefficient in the turbulent adjoint problem";
        ExtIter = "EXT_ITER", scalar("999999"), "Number of total iterations";
        RkAlphaCoeff = "RK_ALPHA_COEFF", float_array("( 0.66667, 0.66667, 1.0 )"), "Runge-Kutta alpha coefficients";
        UnstTimestep = "UNST_TIMESTEP", scalar("0.0"), "Time Step for dual time stepping simulations (s)";
        UnstTime = "UNST_TIME", scalar("1.0"), "Total Physical Time for dual time stepping simulations (s)";
        UnstCflNumber = "UNST_CFL_NUMBER", scalar("0.0"), "Unsteady Courant-Friedrichs-Lewy number of the finest grid";
        UnstIntIter = "UNST_INT_ITER", scalar("100"), "Number of internal iterations (dual time method)";
        TimeInstances = "TIME_INSTANCES", scalar("1"), "Integer number of periodic time instances for Time Spectral";
        UnstRestartIter = "UNST_RESTART_ITER", scalar("0"), "Iteration number to begin unsteady restarts (dual time method)";
        UnstAdjointIter = "UNST_ADJOINT_ITER", scalar("0"), "Starting direct solver iteration for the unsteady adjoint";
        TimeDiscreFlow = "TIME_DISCRE_FLOW", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the flow equations";
        TimeDiscreTne2 = "TIME_DISCRE_TNE2", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the two-temperature equations";
        TimeDiscreAdjtne2 = "TIME_DISCRE_ADJTNE2", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the adjoint two-temperature equations";
        TimeDiscreAdjlevelset = "TIME_DISCRE_ADJLEVELSET", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the adjoint level set equation";
        TimeDiscreAdj = "TIME_DISCRE_ADJ", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the adjoint equations";
        TimeDiscreLin = "TIME_DISCRE_LIN", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the linearized equations";
        TimeDiscreTurb = "TIME_DISCRE_TURB", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the turbulence model";
        TimeDiscreAdjturb = "TIME_DISCRE_ADJTURB", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the adjoint turbulence model";
        TimeDiscreWave = "TIME_DISCRE_WAVE", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the wave equation";
        TimeDiscreFea = "TIME_DISCRE_FEA", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the structural equations";
        TimeDiscreHeat = "TIME_DISCRE_HEAT", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the heat equation";
        TimeDiscrePoisson = "TIME_DISCRE_POISSON", enumeration(TIME_DISCRE, "EULER_IMPLICIT"), "Time discretization of the Poisson equation";
    }
    LINEAR {
        LinearSolver = "LINEAR_SOLVER", enumeration(LINEAR_SOLVER, "FGMRES"), "Linear solver for the implicit, mesh deformation, or discrete adjoint systems";
        LinearSolverPrec = "LINEAR_SOLVER_PREC", enumeration(PRECONDITIONER, "LU_SGS"), "Preconditioner for the Krylov linear solvers";
        LinearSolverError = "LINEAR_SOLVER_ERROR", scalar("1E-5"), "Minimum error threshold for the linear solver for the implicit formulation";
        LinearSolverIter = "LINEAR_SOLVER_ITER", scalar("10"), "Maximum number of iterations of the linear solver for the implicit formulation";
        LinearSolverRelax = "LINEAR_SOLVER_RELAX", scalar("1.0"), "Relaxation of the linear solver for the implicit formulation";
        RoeTurkelPrec = "ROE_TURKEL_PREC", boolean(false), "Roe-Turkel preconditioning for low Mach number flows";
        MinRoeTurkelPrec = "MIN_ROE_TURKEL_PREC", scalar("0.01"), "Minimum value of the Roe-Turkel preconditioning parameter";
        MaxRoeTurkelPrec = "MAX_ROE_TURKEL_PREC", scalar("0.2"), "Maximum value of the Roe-Turkel preconditioning parameter";
        AdjturbLinSolver = "ADJTURB_LIN_SOLVER", enumeration(LINEAR_SOLVER, "FGMRES"), "Linear solver for the turbulent adjoint systems";
        AdjturbLinPrec = "ADJTURB_LIN_PREC", enumeration(PRECONDITIONER, "LU_SGS"), "Preconditioner for the turbulent adjoint Krylov linear solvers";
        AdjturbLinError = "ADJTURB_LIN_ERROR", scalar("1E-5"), "Minimum error threshold for the turbulent adjoint linear solver for the implicit formulation";
        AdjturbLinIter = "ADJTURB_LIN_ITER", scalar("10"), "Maximum number of iterations of the turbulent adjoint linear solver for the implicit formulation";
    }
    MOTION {
        GridMovement = "GRID_MOVEMENT", boolean(false), "Mesh motion for unsteady simulations";
        GridMovementKind = "GRID_MOVEMENT_KIND", enum_list(GRID_MOVEMENT, "NO_MOVEMENT"), "Type of mesh motion";
        MarkerMoving = "MARKER_MOVING", string_array("NONE"), "Marker(s) of moving surfaces (MOVING_WALL or DEFORMING grid motion).";
        MachMotion = "MACH_MOTION", scalar("0.0"), "Mach number (non-dimensional, based on the mesh velocity and freestream vals.)";
        MotionOriginX = "MOTION_ORIGIN_X", float_array("0.0"), "X coordinates of the rigid motion origin";
        MotionOriginY = "MOTION_ORIGIN_Y", float_array("0.0"), "Y coordinates of the rigid motion origin";
        MotionOriginZ = "MOTION_ORIGIN_Z", float_array("0.0"), "Z coordinates of the rigid motion origin";
        TranslationRateX = "TRANSLATION_RATE_X", float_array("0.0"), "Translational velocity (m/s) in the x direction (RIGID_MOTION only)";
        TranslationRateY = "TRANSLATION_RATE_Y", float_array("0.0"), "Translational velocity (m/s) in the y direction (RIGID_MOTION only)";
        TranslationRateZ = "TRANSLATION_RATE_Z", float_array("0.0"), "Translational velocity (m/s) in the z direction (RIGID_MOTION only)";
        RotationRateX = "ROTATION_RATE_X", float_array("0.0"), "Angular velocity (rad/s) about the x axis (RIGID_MOTION only)";
        RotationRateY = "ROTATION_RATE_Y", float_array("0.0"), "Angular velocity (rad/s) about the y axis (RIGID_MOTION only)";
        RotationRateZ = "ROTATION_RATE_Z", float_array("0.0"), "Angular velocity (rad/s) about the z axis (RIGID_MOTION only)";
        PitchingOmegaX = "PITCHING_OMEGA_X", float_array("0.0"), "Pitching angular freq. (rad/s) about the x axis (RIGID_MOTION only)";
        PitchingOmegaY = "PITCHING_OMEGA_Y", float_array("0.0"), "Pitching angular freq. (rad/s) about the y axis (RIGID_MOTION only)";
        PitchingOmegaZ = "PITCHING_OMEGA_Z", float_array("0.0"), "Pitching angular freq. (rad/s) about the z axis (RIGID_MOTION only)";
        PitchingAmplX = "PITCHING_AMPL_X", float_array("0.0"), "Pitching amplitude (degrees) about the x axis (RIGID_MOTION only)";
        PitchingAmplY = "PITCHING_AMPL_Y", float_array("0.0"), "Pitching amplitude (degrees) about the y axis (RIGID_MOTION only)";
        PitchingAmplZ = "PITCHING_AMPL_Z", float_array("0.0"), "Pitching amplitude (degrees) about the z axis (RIGID_MOTION only)";
        PitchingPhaseX = "PITCHING_PHASE_X", float_array("0.0"), "Pitching phase offset (degrees) about the x axis (RIGID_MOTION only)";
        PitchingPhaseY = "PITCHING_PHASE_Y", float_array("0.0"), "Pitching phase offset (degrees) about the y axis (RIGID_MOTION only)";
        PitchingPhaseZ = "PITCHING_PHASE_Z", float_array("0.0"), "Pitching phase offset (degrees) about the z axis (RIGID_MOTION only)";
        PlungingOmegaX = "PLUNGING_OMEGA_X", float_array("0.0"), "Plunging angular freq. (rad/s) in the x direction (RIGID_MOTION only)";
        PlungingOmegaY = "PLUNGING_OMEGA_Y", float_array("0.0"), "Plunging angular freq. (rad/s) in the y direction (RIGID_MOTION only)";
        PlungingOmegaZ = "PLUNGING_OMEGA_Z", float_array("0.0"), "Plunging angular freq. (rad/s) in the z direction (RIGID_MOTION only)";
        PlungingAmplX = "PLUNGING_AMPL_X", float_array("0.0"), "Plunging amplitude (m) in the x direction (RIGID_MOTION only)";
        PlungingAmplY = "PLUNGING_AMPL_Y", float_array("0.0"), "Plunging amplitude (m) in the y direction (RIGID_MOTION only)";
        PlungingAmplZ = "PLUNGING_AMPL_Z", float_array("0.0"), "Plunging amplitude (m) in the z direction (RIGID_MOTION only)";
        MoveMotionOrigin = "MOVE_MOTION_ORIGIN", float_array("0"), "Value to move motion origins (1 or 0)";
        MotionFilename = "MOTION_FILENAME", string("mesh_motion.dat"), "Mesh motion input file";
        FreqPlungeAeroelastic = "FREQ_PLUNGE_AEROELASTIC", scalar("100"), "Uncoupled Aeroelastic Frequency Plunge.";
        FreqPitchAeroelastic = "FREQ_PITCH_AEROELASTIC", scalar("100"), "Uncoupled Aeroelastic Frequency Pitch.";
    }
    GUST {
        WindGust = "WIND_GUST", boolean(false), "Apply a wind gust";
        GustType = "GUST_TYPE", enumeration(GUST_TYPE, "NONE"), "Type of gust";
        GustWavelength = "GUST_WAVELENGTH", scalar("0.0"), "Gust wavelength (meters)";
        GustPeriods = "GUST_PERIODS", scalar("1.0"), "Number of gust periods";
        GustAmpl = "GUST_AMPL", scalar("0.0"), "Gust amplitude (m/s)";
        GustBeginTime = "GUST_BEGIN_TIME", scalar("0.0"), "Time at which to begin the gust (sec)";
        GustBeginLoc = "GUST_BEGIN_LOC", scalar("0.0"), "Location at which the gust begins (meters)";
        GustDir = "GUST_DIR", enumeration(GUST_DIR, "Y_DIR"), "Direction of the gust X or Y dir";
    }
    CONVERGENCE {
        ConvCriteria = "CONV_CRITERIA", enumeration(CONV_CRITERIA, "RESIDUAL"), "Convergence criteria";
        ResidualReduction = "RESIDUAL_REDUCTION", scalar("3.0"), "Residual reduction (order of magnitude with respect to the initial value)";
        ResidualMinval = "RESIDUAL_MINVAL", scalar("-8.0"), "Min value of the residual (log10 of the residual)";
        StartconvIter = "STARTCONV_ITER", scalar("5"), "Iteration number to begin convergence monitoring";
        CauchyElems = "CAUCHY_ELEMS", scalar("100"), "Number of elements to apply the criteria";
        CauchyEps = "CAUCHY_EPS", scalar("1E-10"), "Epsilon to control the series convergence";
        CauchyFuncFlow = "CAUCHY_FUNC_FLOW", enumeration(OBJECTIVE, "DRAG"), "Flow functional for the Cauchy criteria";
        CauchyFuncAdj = "CAUCHY_FUNC_ADJ", enumeration(SENSITIVITY, "SENS_GEOMETRY"), "Adjoint functional for the Cauchy criteria";
        CauchyFuncLin = "CAUCHY_FUNC_LIN", enumeration(LINEARIZED, "DELTA_DRAG"), "Linearized functional for the Cauchy criteria";
        FullmgCauchyEps = "FULLMG_CAUCHY_EPS", scalar("1E-4"), "Epsilon for a full multigrid method evaluation";
    }
    MULTIGRID {
        Fullmg = "FULLMG", boolean(false), "Full multi-grid";
        StartUpIter = "START_UP_ITER", scalar("0"), "Start up iterations using the fine grid only";
        Mglevel = "MGLEVEL", scalar("0"), "Multi-grid Levels";
        Mgcycle = "MGCYCLE", scalar("0"), "Multi-grid Cycle (0 = V cycle, 1 = W Cycle)";
        MgPreSmooth = "MG_PRE_SMOOTH", float_array("( 1, 2, 3, 3 )"), "Multi-grid pre-smoothing level";
        MgPostSmooth = "MG_POST_SMOOTH", float_array("( 0, 0, 0, 0 )"), "Multi-grid post-smoothing level";
        MgCorrectionSmooth = "MG_CORRECTION_SMOOTH", float_array("( 0, 0, 0, 0 )"), "Jacobi implicit smoothing of the correction";
        MgDampRestriction = "MG_DAMP_RESTRICTION", scalar("0.75"), "Damping factor for the residual restriction";
        MgDampProlongation = "MG_DAMP_PROLONGATION", scalar("0.75"), "Damping factor for the correction prolongation";
        MgCflReduction = "MG_CFL_REDUCTION", scalar("0.8"), "CFL reduction factor on the coarse levels";
        MaxChildren = "MAX_CHILDREN", scalar("500"), "Maximum number of children in the agglomeration stage";
        MaxDimension = "MAX_DIMENSION", scalar("0.1"), "Maximum length of an agglomerated element (relative to the domain)";
    }
    SPATIAL {
        NumMethodGrad = "NUM_METHOD_GRAD", enumeration(GRADIENT, "GREEN_GAUSS"), "Numerical method for spatial gradients";
        LimiterCoeff = "LIMITER_COEFF", scalar("0.3"), "Coefficient for the limiter";
        SharpEdgesCoeff = "SHARP_EDGES_COEFF", scalar("3.0"), "Coefficient for detecting the limit of the sharp edges";
        ViscNumMethodPoisson = "VISC_NUM_METHOD_POISSON", enumeration(VISCOUS, "GALERKIN"), "Viscous numerical method of the Poisson equation";
        SourNumMethodPoisson = "SOUR_NUM_METHOD_POISSON", enumeration(SOURCE, "PIECEWISE_CONSTANT"), "Source term numerical method of the Poisson equation";
        SourNumMethodTemplate = "SOUR_NUM_METHOD_TEMPLATE", enumeration(SOURCE, "NONE"), "Source term numerical method of the template solver";
    }
    CONV_FLOW {
        ConvNumMethodFlow = "CONV_NUM_METHOD_FLOW", enumeration(CONVECTIVE, "ROE"), "Convective numerical method";
        ViscNumMethodFlow = "VISC_NUM_METHOD_FLOW", enumeration(VISCOUS, "AVG_GRAD_CORRECTED"), "Viscous numerical method";
        SourNumMethodFlow = "SOUR_NUM_METHOD_FLOW", enumeration(SOURCE, "PIECEWISE_CONSTANT"), "Source term numerical method";
        SlopeLimiterFlow = "SLOPE_LIMITER_FLOW", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
        AdCoeffFlow = "AD_COEFF_FLOW", fixed_floats(3, "( 0.15, 0.5, 0.02 )"), "1st, 2nd and 4th order artificial dissipation coefficients";
    }
    CONV_ADJ {
        ConvNumMethodAdj = "CONV_NUM_METHOD_ADJ", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodAdj = "VISC_NUM_METHOD_ADJ", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodAdj = "SOUR_NUM_METHOD_ADJ", enumeration(SOURCE, "NONE"), "Source term numerical method";
        SlopeLimiterAdjflow = "SLOPE_LIMITER_ADJFLOW", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
        AdCoeffAdj = "AD_COEFF_ADJ", fixed_floats(3, "( 0.15, 0.5, 0.02 )"), "1st, 2nd and 4th order artificial dissipation coefficients";
    }
    CONV_TURB {
        ConvNumMethodTurb = "CONV_NUM_METHOD_TURB", enumeration(CONVECTIVE, "SCALAR_UPWIND"), "Convective numerical method";
        ViscNumMethodTurb = "VISC_NUM_METHOD_TURB", enumeration(VISCOUS, "AVG_GRAD_CORRECTED"), "Viscous numerical method";
        SourNumMethodTurb = "SOUR_NUM_METHOD_TURB", enumeration(SOURCE, "PIECEWISE_CONSTANT"), "Source term numerical method";
        SlopeLimiterTurb = "SLOPE_LIMITER_TURB", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
    }
    CONV_ADJTURB {
        ConvNumMethodAdjturb = "CONV_NUM_METHOD_ADJTURB", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodAdjturb = "VISC_NUM_METHOD_ADJTURB", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodAdjturb = "SOUR_NUM_METHOD_ADJTURB", enumeration(SOURCE, "NONE"), "Source term numerical method";
        SlopeLimiterAdjturb = "SLOPE_LIMITER_ADJTURB", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
    }
    CONV_LIN {
        ConvNumMethodLin = "CONV_NUM_METHOD_LIN", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodLin = "VISC_NUM_METHOD_LIN", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodLin = "SOUR_NUM_METHOD_LIN", enumeration(SOURCE, "NONE"), "Source term numerical method";
        AdCoeffLin = "AD_COEFF_LIN", fixed_floats(2, "( 0.15, 0.02 )"), "1st and 4th order artificial dissipation coefficients";
    }
    CONV_ADJLEVELSET {
        ConvNumMethodAdjlevelset = "CONV_NUM_METHOD_ADJLEVELSET", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodAdjlevelset = "VISC_NUM_METHOD_ADJLEVELSET", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodAdjlevelset = "SOUR_NUM_METHOD_ADJLEVELSET", enumeration(SOURCE, "NONE"), "Source term numerical method";
        SlopeLimiterAdjlevelset = "SLOPE_LIMITER_ADJLEVELSET", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
    }
    CONV_TNE2 {
        ConvNumMethodTne2 = "CONV_NUM_METHOD_TNE2", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodTne2 = "VISC_NUM_METHOD_TNE2", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodTne2 = "SOUR_NUM_METHOD_TNE2", enumeration(SOURCE, "NONE"), "Source term numerical method";
        SlopeLimiterTne2 = "SLOPE_LIMITER_TNE2", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
        AdCoeffTne2 = "AD_COEFF_TNE2", fixed_floats(3, "( 0.15, 0.5, 0.02 )"), "1st, 2nd and 4th order artificial dissipation coefficients";
    }
    CONV_ADJTNE2 {
        ConvNumMethodAdjtne2 = "CONV_NUM_METHOD_ADJTNE2", enumeration(CONVECTIVE, "NONE"), "Convective numerical method";
        ViscNumMethodAdjtne2 = "VISC_NUM_METHOD_ADJTNE2", enumeration(VISCOUS, "NONE"), "Viscous numerical method";
        SourNumMethodAdjtne2 = "SOUR_NUM_METHOD_ADJTNE2", enumeration(SOURCE, "NONE"), "Source term numerical method";
        SlopeLimiterAdjtne2 = "SLOPE_LIMITER_ADJTNE2", enumeration(LIMITER, "VENKATAKRISHNAN"), "Slope limiter";
        AdCoeffAdjtne2 = "AD_COEFF_ADJTNE2", fixed_floats(3, "( 0.15, 0.5, 0.02 )"), "1st, 2nd and 4th order artificial dissipation coefficients";
    }
    ADJOINT {
        AdjLimit = "LIMIT_ADJFLOW", scalar("1E6"), "Limit value for the adjoint variable";
        AdjObjfunc = "OBJECTIVE_FUNCTION", enumeration(OBJECTIVE, "DRAG"), "Adjoint problem boundary condition";
        GeoSectionLimit = "GEO_SECTION_LIMIT", fixed_floats(2, "( 0.0, 1.0 )"), "Limits of the sections used by the geometry code";
        GeoMode = "GEO_MODE", enumeration(GEO_MODE, "FUNCTION"), "Mode of the GDC code (analysis, or gradient)";
        DragInSonicboom = "DRAG_IN_SONICBOOM", scalar("0.0"), "Drag weight in sonic boom Objective Function (from 0.0 to 1.0)";
        SensSmoothing = "SENS_SMOOTHING", enumeration(SENS_SMOOTHING, "NONE"), "Sensitivity smoothing";
        ContinuousEqns = "CONTINUOUS_EQNS", enumeration(CONTINUOUS_EQNS, "EULER"), "Continuous governing equation set";
        DiscreteEqns = "DISCRETE_EQNS", enumeration(DISCRETE_EQNS, "NONE"), "Discrete governing equation set";
        FrozenVisc = "FROZEN_VISC", boolean(true), "Adjoint frozen viscosity";
        CteViscousDrag = "CTE_VISCOUS_DRAG", scalar("0.0"), "Constant viscous drag added to the objective";
        SensRemoveSharp = "SENS_REMOVE_SHARP", boolean(false), "Remove sharp edges from the sensitivity evaluation";
    }
    IO {
        OutputFormat = "OUTPUT_FORMAT", enumeration(OUTPUT_FORMAT, "TECPLOT"), "Output file format";
        MeshFormat = "MESH_FORMAT", enumeration(MESH_FORMAT, "SU2"), "Mesh input file format";
        CgnsToSu2 = "CGNS_TO_SU2", boolean(false), "Convert a CGNS mesh to SU2 format";
        MeshFilename = "MESH_FILENAME", string("mesh.su2"), "Mesh input file";
        MeshOutFilename = "MESH_OUT_FILENAME", string("mesh_out.su2"), "Mesh output file";
        ConvFilename = "CONV_FILENAME", string("history"), "Output file convergence history (w/o extension)";
        SolutionFlowFilename = "SOLUTION_FLOW_FILENAME", string("solution_flow.dat"), "Restart flow input file";
        FarfieldFilename = "FARFIELD_FILENAME", string("farfield.dat"), "Far-field input file";
        SolutionLinFilename = "SOLUTION_LIN_FILENAME", string("solution_lin.dat"), "Restart linear flow input file";
        SolutionAdjFilename = "SOLUTION_ADJ_FILENAME", string("solution_adj.dat"), "Restart adjoint input file";
        RestartFlowFilename = "RESTART_FLOW_FILENAME", string("restart_flow.dat"), "Output file restart flow";
        RestartLinFilename = "RESTART_LIN_FILENAME", string("restart_lin.dat"), "Output file linear flow";
        RestartAdjFilename = "RESTART_ADJ_FILENAME", string("restart_adj.dat"), "Output file restart adjoint";
        RestartWaveFilename = "RESTART_WAVE_FILENAME", string("restart_wave.dat"), "Output file restart wave";
        VolumeFlowFilename = "VOLUME_FLOW_FILENAME", string("flow"), "Output file flow (w/o extension) variables";
        VolumeStructureFilename = "VOLUME_STRUCTURE_FILENAME", string("structure"), "Output file structure (w/o extension) variables";
        SurfaceStructureFilename = "SURFACE_STRUCTURE_FILENAME", string("surface_structure"), "Output file surface structure (w/o extension) variables";
        SurfaceWaveFilename = "SURFACE_WAVE_FILENAME", string("surface_wave"), "Output file surface wave (w/o extension) variables";
        SurfaceHeatFilename = "SURFACE_HEAT_FILENAME", string("surface_heat"), "Output file surface heat (w/o extension) variables";
        VolumeWaveFilename = "VOLUME_WAVE_FILENAME", string("wave"), "Output file wave (w/o extension) variables";
        VolumeHeatFilename = "VOLUME_HEAT_FILENAME", string("heat"), "Output file heat (w/o extension) variables";
        VolumeAdjwaveFilename = "VOLUME_ADJWAVE_FILENAME", string("adjoint_wave"), "Output file adj. wave (w/o extension) variables";
        VolumeAdjFilename = "VOLUME_ADJ_FILENAME", string("adjoint"), "Output file adjoint (w/o extension) variables";
        VolumeLinFilename = "VOLUME_LIN_FILENAME", string("linearized"), "Output file linear (w/o extension) variables";
        GradObjfuncFilename = "GRAD_OBJFUNC_FILENAME", string("of_grad.dat"), "Output objective function gradient";
        ValueObjfuncFilename = "VALUE_OBJFUNC_FILENAME", string("of_func.dat"), "Output objective function";
        SurfaceFlowFilename = "SURFACE_FLOW_FILENAME", string("surface_flow"), "Output file surface flow coefficient (w/o extension)";
        SurfaceAdjFilename = "SURFACE_ADJ_FILENAME", string("surface_adjoint"), "Output file surface adjoint coefficient (w/o extension)";
        SurfaceLinFilename = "SURFACE_LIN_FILENAME", string("surface_linear"), "Output file surface linear coefficient (w/o extension)";
        WrtSolFreq = "WRT_SOL_FREQ", scalar("1000"), "Writing solution file frequency";
        WrtSolFreqDualtime = "WRT_SOL_FREQ_DUALTIME", scalar("1"), "Writing solution file frequency for the dual time";
        WrtConFreq = "WRT_CON_FREQ", scalar("1"), "Writing convergence history frequency";
        WrtConFreqDualtime = "WRT_CON_FREQ_DUALTIME", scalar("10"), "Writing convergence history frequency for the dual time";
        WrtVolSol = "WRT_VOL_SOL", boolean(true), "Write a volume solution file";
        WrtSrfSol = "WRT_SRF_SOL", boolean(true), "Write a surface solution file";
        WrtCsvSol = "WRT_CSV_SOL", boolean(true), "Write a surface CSV solution file";
        WrtRestart = "WRT_RESTART", boolean(true), "Write a restart solution file";
        WrtResiduals = "WRT_RESIDUALS", boolean(false), "Output residual info to solution/restart file";
        WrtHalo = "WRT_HALO", boolean(false), "Output the rind layers in the solution files";
        WrtSectionalForces = "WRT_SECTIONAL_FORCES", boolean(false), "Output sectional forces for specified markers.";
    }
    EQUIV_AREA {
        EquivArea = "EQUIV_AREA", boolean(false), "Evaluate equivalent area on the Near-Field";
        EaIntLimit = "EA_INT_LIMIT", fixed_floats(3, "( 1.6, 2.9, 1.0 )"), "Integration limits of the equivalent area ( xmin, xmax, Dist_NearField )";
    }
    FREESTREAM {
        GasConstant = "GAS_CONSTANT", scalar("287.87"), "Specific gas constant (287.87 J/kg*K (air), only for compressible flows)";
        GammaValue = "GAMMA_VALUE", scalar("1.4"), "Ratio of specific heats (1.4 (air), only for compressible flows)";
        ReynoldsNumber = "REYNOLDS_NUMBER", scalar("0.0"), "Reynolds number (non-dimensional, based on the free-stream values)";
        ReynoldsLength = "REYNOLDS_LENGTH", scalar("1.0"), "Reynolds length (1 m by default)";
        PrandtlLam = "PRANDTL_LAM", scalar("0.72"), "Laminar Prandtl number (0.72 (air), only for compressible flows)";
        PrandtlTurb = "PRANDTL_TURB", scalar("0.9"), "Turbulent Prandtl number (0.9 (air), only for compressible flows)";
        BulkModulus = "BULK_MODULUS", scalar("2.15E9"), "Value of the Bulk Modulus";
        ArtcompFactor = "ARTCOMP_FACTOR", scalar("1.0"), "Artifical compressibility factor";
        MachNumber = "MACH_NUMBER", scalar("0.0"), "Mach number (non-dimensional, based on the free-stream values)";
        MixtureMolarMass = "MIXTURE_MOLAR_MASS", scalar("28.97"), "Molar mass of the gas mixture";
        FreestreamPressure = "FREESTREAM_PRESSURE", scalar("101325.0"), "Free-stream pressure (101325.0 N/m^2 by default)";
        FreestreamDensity = "FREESTREAM_DENSITY", scalar("1.2886"), "Free-stream density (1.2886 Kg/m^3 (air), 998.2 Kg/m^3 (water))";
        FreestreamTemperature = "FREESTREAM_TEMPERATURE", scalar("288.15"), "Free-stream temperature (288.15 K by default)";
        FreestreamTemperatureVe = "FREESTREAM_TEMPERATURE_VE", scalar("288.15"), "Free-stream vibrational-electronic temperature (288.15 K by default)";
        FreestreamVelocity = "FREESTREAM_VELOCITY", fixed_floats(3, "( 1.0, 0.0, 0.0 )"), "Free-stream velocity (m/s)";
        FreestreamViscosity = "FREESTREAM_VISCOSITY", scalar("1.853E-5"), "Free-stream viscosity (1.853E-5 Ns/m^2 (air), 0.798E-3 Ns/m^2 (water))";
        FreestreamIntermittency = "FREESTREAM_INTERMITTENCY", scalar("1.0"), "Free-stream intermittency";
        FreestreamTurbulenceintensity = "FREESTREAM_TURBULENCEINTENSITY", scalar("0.05"), "Free-stream turbulence intensity";
        FreestreamNuFactor = "FREESTREAM_NU_FACTOR", scalar("3.0"), "Free-stream ratio of turbulent to laminar kinematic viscosity";
        FreestreamTurb2lamviscratio = "FREESTREAM_TURB2LAMVISCRATIO", scalar("10.0"), "Free-stream ratio of turbulent to laminar viscosity";
        SideslipAngle = "SIDESLIP_ANGLE", scalar("0.0"), "Side-slip angle (degrees, only for compressible flows)";
        Aoa = "AOA", scalar("0.0"), "Angle of attack (degrees, only for compressible flows)";
    }
    REFERENCE {
        RefOriginMomentX = "REF_ORIGIN_MOMENT_X", float_array("0.00"), "X Reference origin for moment computation";
        RefOriginMomentY = "REF_ORIGIN_MOMENT_Y", float_array("0.00"), "Y Reference origin for moment computation";
        RefOriginMomentZ = "REF_ORIGIN_MOMENT_Z", float_array("0.00"), "Z Reference origin for moment computation";
        RefArea = "REF_AREA", scalar("1.0"), "Reference area for force coefficients (0 implies automatic calculation)";
        RefLengthMoment = "REF_LENGTH_MOMENT", scalar("1.0"), "Reference length for pitching, rolling, and yawing non-dimensional moment";
        RefElemLength = "REF_ELEM_LENGTH", scalar("0.1"), "Reference element length for computing the slope limiter epsilon";
        RefSharpEdges = "REF_SHARP_EDGES", scalar("3.0"), "Reference coefficient for detecting sharp edges";
        RefPressure = "REF_PRESSURE", scalar("1.0"), "Reference pressure (1.0 N/m^2 by default, only for compressible flows)";
        RefTemperature = "REF_TEMPERATURE", scalar("1.0"), "Reference temperature (1.0 K by default, only for compressible flows)";
        RefDensity = "REF_DENSITY", scalar("1.0"), "Reference density (1.0 Kg/m^3 by default, only for compressible flows)";
        RefVelocity = "REF_VELOCITY", scalar("-1.0"), "Reference velocity (incompressible only)";
        RefViscosity = "REF_VISCOSITY", scalar("-1.0"), "Reference viscosity (incompressible only)";
        ConvertToMeter = "CONVERT_TO_METER", scalar("1.0"), "Factor for converting the grid to meters";
        WriteConvertedMesh = "WRITE_CONVERTED_MESH", boolean(false), "Write a new mesh converted to meters";
    }
    REACTING {
        GasModel = "GAS_MODEL", enumeration(GAS_MODEL, "ARGON"), "Specify chemical model for multi-species simulations";
        GasComposition = "GAS_COMPOSITION", compound(PAIRS), "Species and mass fractions of the gas mixture";
    }
    FREE_SURFACE {
        RatioDensity = "RATIO_DENSITY", scalar("0.1"), "Ratio of density for two phase problems";
        RatioViscosity = "RATIO_VISCOSITY", scalar("0.1"), "Ratio of viscosity for two phase problems";
        FreesurfaceZero = "FREESURFACE_ZERO", scalar("0.0"), "Location of the freesurface (y or z coordinate)";
        FreesurfaceDepth = "FREESURFACE_DEPTH", scalar("1.0"), "Free surface depth surface (x or y coordinate)";
        FreesurfaceThickness = "FREESURFACE_THICKNESS", scalar("0.1"), "Thickness of the interface in a free surface problem";
        FreesurfaceDampingCoeff = "FREESURFACE_DAMPING_COEFF", scalar("0.0"), "Free surface damping coefficient";
        FreesurfaceDampingLength = "FREESURFACE_DAMPING_LENGTH", scalar("1.0"), "Free surface damping length (times the baseline wave)";
        FreesurfaceOutlet = "FREESURFACE_OUTLET", scalar("0.0"), "Location of the free surface outlet surface (x or y coordinate)";
    }
    DEFORMATION {
        DvKind = "DV_KIND", enum_list(DESIGN_VARIABLE, "NO_DEFORMATION"), "Kind of deformation";
        DvMarker = "DV_MARKER", string_array("NONE"), "Marker of the surface to which we are going apply the shape deformation";
        DvValue = "DV_VALUE", float_array("NONE"), "New value of the shape deformation";
        DvParam = "DV_PARAM", compound(DV_PARAM), "Parameters of the shape deformation";
        HoldGridFixed = "HOLD_GRID_FIXED", boolean(false), "Hold the grid fixed in a region";
        HoldGridFixedCoord = "HOLD_GRID_FIXED_COORD", fixed_floats(6, "( -1E15, -1E15, -1E15, 1E15, 1E15, 1E15 )"), "Coordinates of the box where the grid will be deformed (Xmin, Ymin, Zmin, Xmax, Ymax, Zmax)";
        VisualizeDeformation = "VISUALIZE_DEFORMATION", boolean(false), "Visualize the deformation";
        GridDeformIter = "GRID_DEFORM_ITER", scalar("1"), "Number of iterations for FEA mesh deformation (surface deformation increments)";
    }
    ROTORCRAFT {
        CyclicPitch = "CYCLIC_PITCH", scalar("0.0"), "Cyclic pitch amplitude (degrees)";
        CollectivePitch = "COLLECTIVE_PITCH", scalar("0.0"), "Collective pitch setting (degrees)";
    }
    FEA {
        ViscNumMethodFea = "VISC_NUM_METHOD_FEA", enumeration(VISCOUS, "GALERKIN"), "Viscous numerical method of the structural equations";
        SourNumMethodFea = "SOUR_NUM_METHOD_FEA", enumeration(SOURCE, "NONE"), "Source term numerical method of the structural equations";
        ElasticityModulus = "ELASTICITY_MODULUS", scalar("2E11"), "Modulus of elasticity";
        PoissonRatio = "POISSON_RATIO", scalar("0.30"), "Poisson ratio";
        MaterialDensity = "MATERIAL_DENSITY", scalar("7854"), "Material density";
    }
    WAVE {
        ViscNumMethodWave = "VISC_NUM_METHOD_WAVE", enumeration(VISCOUS, "GALERKIN"), "Viscous numerical method of the wave equation";
        SourNumMethodWave = "SOUR_NUM_METHOD_WAVE", enumeration(SOURCE, "NONE"), "Source term numerical method of the wave equation";
        WaveSpeed = "WAVE_SPEED", scalar("331.79"), "Constant wave speed";
    }
    HEAT {
        ViscNumMethodHeat = "VISC_NUM_METHOD_HEAT", enumeration(VISCOUS, "GALERKIN"), "Viscous numerical method of the heat equation";
        SourNumMethodHeat = "SOUR_NUM_METHOD_HEAT", enumeration(SOURCE, "NONE"), "Source term numerical method of the heat equation";
        ThermalDiffusivity = "THERMAL_DIFFUSIVITY", scalar("1.172E-5"), "Thermal diffusivity constant";
    }
}
