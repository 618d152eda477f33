//! Electron microscopy and photoemission components.

nexus_base_class! {
    /// Description of an electro-magnetic lens or a compound lens.
    NXlens_em {
        field TYPE = "type": NX_CHAR enum ["single", "double", "quadrupole", "hexapole", "octupole"];
        field NAME = "name": NX_CHAR;
        field VOLTAGE = "voltage": NX_NUMBER [NX_VOLTAGE];
        field CURRENT = "current": NX_NUMBER [NX_CURRENT];
        field VALUE = "value": NX_NUMBER [NX_ANY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group FABRICATION = "fabrication": NXfabrication;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// Quantified aberration coefficient in an aberration corrected microscope.
    NXaberration {
        field MAGNITUDE = "magnitude": NX_FLOAT [NX_LENGTH];
        field UNCERTAINTY = "uncertainty": NX_FLOAT [NX_LENGTH];
        field UNCERTAINTY_MODEL = "uncertainty_model": NX_CHAR;
        field DELTA_TIME = "delta_time": NX_FLOAT [NX_TIME];
        field ANGLE = "angle": NX_FLOAT [NX_ANGLE];
        field NAME = "name": NX_CHAR;
        field ALIAS = "alias": NX_CHAR;
    }
}

nexus_base_class! {
    /// Corrector for aberrations in an electron microscope.
    NXcorrector_cs {
        field APPLIED = "applied": NX_BOOLEAN;
        field NAME = "name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        group ZEMLIN_TABLEAU = "zemlin_tableau": NXprocess;
        group ABERRATION = "aberration": NXaberration;
        group LENS = "lens": NXlens_em;
        group FABRICATION = "fabrication": NXfabrication;
    }
}

nexus_base_class! {
    /// Container for components to form a controlled electron beam.
    NXebeam_column {
        field OPERATION_MODE = "operation_mode": NX_CHAR;
        field ELECTRON_SOURCE = "electron_source": NX_CHAR;
        field EMITTER_TYPE = "emitter_type": NX_CHAR enum ["filament", "schottky", "cold_cathode_field_emitter", "other"];
        field EMITTER_MATERIAL = "emitter_material": NX_CHAR;
        field VOLTAGE = "voltage": NX_NUMBER [NX_VOLTAGE];
        group FABRICATION = "fabrication": NXfabrication;
        group APERTURE_EM = "aperture_em": NXaperture;
        group LENS_EM = "lens_em": NXlens_em;
        group CORRECTOR_CS = "corrector_cs": NXcorrector_cs;
        group STAGE_LAB = "stage_lab": NXstage_lab;
        group SENSOR = "sensor": NXsensor;
        group BEAM = "beam": NXbeam;
    }
}

nexus_base_class! {
    /// Container for components to form a controlled ion beam.
    NXibeam_column {
        field OPERATION_MODE = "operation_mode": NX_CHAR;
        field ION_SOURCE = "ion_source": NX_CHAR;
        field EMITTER_TYPE = "emitter_type": NX_CHAR enum ["liquid_metal", "plasma", "gas_field", "other"];
        field PROBE = "probe": NX_CHAR;
        field FLUX = "flux": NX_NUMBER [NX_FLUX];
        field BRIGHTNESS = "brightness": NX_NUMBER [NX_ANY];
        field CURRENT = "current": NX_NUMBER [NX_CURRENT];
        field VOLTAGE = "voltage": NX_NUMBER [NX_VOLTAGE];
        field ION_ENERGY_PROFILE = "ion_energy_profile": NX_NUMBER [NX_ENERGY];
        group FABRICATION = "fabrication": NXfabrication;
        group APERTURE_EM = "aperture_em": NXaperture;
        group LENS_EM = "lens_em": NXlens_em;
        group SENSOR = "sensor": NXsensor;
        group BEAM = "beam": NXbeam;
    }
}

nexus_base_class! {
    /// A stage lab can be used to hold, align, orient, and prepare a specimen.
    NXstage_lab {
        field NAME = "name": NX_CHAR;
        field DESIGN = "design": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field TILT_1 = "tilt_1": NX_NUMBER [NX_ANGLE];
        field TILT_2 = "tilt_2": NX_NUMBER [NX_ANGLE];
        field ROTATION = "rotation": NX_NUMBER [NX_ANGLE];
        field POSITION = "position": NX_NUMBER [NX_LENGTH];
        field BIAS_VOLTAGE = "bias_voltage": NX_NUMBER [NX_VOLTAGE];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group FABRICATION = "fabrication": NXfabrication;
        group POSITIONER = "positioner": NXpositioner;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// Scan box and coils which deflect an electron beam in a controlled manner.
    NXscanbox_em {
        field CALIBRATION_STYLE = "calibration_style": NX_CHAR;
        field CENTER = "center": NX_NUMBER [NX_ANY];
        field FLYBACK_TIME = "flyback_time": NX_NUMBER [NX_TIME];
        field LINE_TIME = "line_time": NX_NUMBER [NX_TIME];
        field PIXEL_TIME = "pixel_time": NX_NUMBER [NX_TIME];
        field REQUESTED_PIXEL_TIME = "requested_pixel_time": NX_NUMBER [NX_TIME];
        field ROTATION = "rotation": NX_NUMBER [NX_ANGLE];
        field AC_LINE_SYNC = "ac_line_sync": NX_BOOLEAN;
        group FABRICATION = "fabrication": NXfabrication;
    }
}

nexus_base_class! {
    /// Details about a component as it is defined by its manufacturer.
    NXfabrication {
        field VENDOR = "vendor": NX_CHAR;
        field MODEL = "model": NX_CHAR attrs ["version"];
        field IDENTIFIER = "identifier": NX_CHAR;
        field CAPABILITY = "capability": NX_CHAR;
    }
}

nexus_base_class! {
    /// Subclass of NXinstrument describing a photoelectron analyser.
    NXelectronanalyser {
        field DESCRIPTION = "description": NX_CHAR;
        field WORK_FUNCTION = "work_function": NX_FLOAT [NX_ENERGY];
        field VOLTAGE_ENERGY_RANGE = "voltage_energy_range": NX_FLOAT [NX_VOLTAGE];
        field ENERGY_RESOLUTION = "energy_resolution": NX_FLOAT [NX_ENERGY];
        field MOMENTUM_RESOLUTION = "momentum_resolution": NX_FLOAT [NX_WAVENUMBER];
        field ANGULAR_RESOLUTION = "angular_resolution": NX_FLOAT [NX_ANGLE];
        field SPATIAL_RESOLUTION = "spatial_resolution": NX_FLOAT [NX_LENGTH];
        field FAST_AXES = "fast_axes": NX_CHAR;
        field SLOW_AXES = "slow_axes": NX_CHAR;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        group COLLECTIONCOLUMN = "collectioncolumn": NXcollectioncolumn;
        group ENERGYDISPERSION = "energydispersion": NXenergydispersion;
        group SPINDISPERSION = "spindispersion": NXspindispersion;
        group DETECTOR = "detector": NXdetector;
        group DEFLECTOR = "deflector": NXdeflector;
        group LENS_EM = "lens_em": NXlens_em;
        group FABRICATION = "fabrication": NXfabrication;
        group RESOLUTION = "resolution": NXdata;
    }
}

nexus_base_class! {
    /// Subclass of NXelectronanalyser describing the electron collection column.
    NXcollectioncolumn {
        field SCHEME = "scheme": NX_CHAR
            enum ["Standard", "Angular dispersive", "Selective area", "Deflector",
                  "PEEM", "Momentum Microscope"];
        field EXTRACTOR_VOLTAGE = "extractor_voltage": NX_FLOAT [NX_VOLTAGE];
        field EXTRACTOR_CURRENT = "extractor_current": NX_FLOAT [NX_CURRENT];
        field WORKING_DISTANCE = "working_distance": NX_FLOAT [NX_LENGTH];
        field MODE = "mode": NX_CHAR;
        field PROJECTION = "projection": NX_CHAR;
        field MAGNIFICATION = "magnification": NX_FLOAT [NX_DIMENSIONLESS];
        group FIELD_APERTURE = "field_aperture": NXaperture;
        group CONTRAST_APERTURE = "contrast_aperture": NXaperture;
        group APERTURE = "aperture": NXaperture;
        group DEFLECTOR = "deflector": NXdeflector;
        group LENS_EM = "lens_em": NXlens_em;
        group FABRICATION = "fabrication": NXfabrication;
    }
}

nexus_base_class! {
    /// Subclass of NXelectronanalyser describing the energy dispersion section.
    NXenergydispersion {
        field SCHEME = "scheme": NX_CHAR enum ["tof", "hemispherical", "double hemispherical",
                                               "cylindrical mirror", "display mirror",
                                               "retarding grid"];
        field PASS_ENERGY = "pass_energy": NX_FLOAT [NX_ENERGY];
        field KINETIC_ENERGY = "kinetic_energy": NX_FLOAT [NX_ENERGY];
        field DRIFT_ENERGY = "drift_energy": NX_FLOAT [NX_ENERGY];
        field CENTER_ENERGY = "center_energy": NX_FLOAT [NX_ENERGY];
        field ENERGY_SCAN_MODE = "energy_scan_mode": NX_CHAR;
        field TOF_DISTANCE = "tof_distance": NX_FLOAT [NX_LENGTH];
        field RADIUS = "radius": NX_FLOAT [NX_LENGTH];
        field ENERGY_INTERVAL = "energy_interval": NX_FLOAT [NX_ENERGY];
        group APERTURE = "aperture": NXaperture;
        group DEFLECTOR = "deflector": NXdeflector;
        group LENS_EM = "lens_em": NXlens_em;
        group FABRICATION = "fabrication": NXfabrication;
    }
}

nexus_base_class! {
    /// Subclass of NXelectronanalyser describing the spin filters.
    NXspindispersion {
        field TYPE = "type": NX_CHAR;
        field FIGURE_OF_MERIT = "figure_of_merit": NX_FLOAT [NX_DIMENSIONLESS];
        field SHERMAN_FUNCTION = "shermann_function": NX_FLOAT [NX_DIMENSIONLESS];
        field SCATTERING_ENERGY = "scattering_energy": NX_FLOAT [NX_ENERGY];
        field SCATTERING_ANGLE = "scattering_angle": NX_FLOAT [NX_ANGLE];
        field TARGET = "target": NX_CHAR;
        field TARGET_PREPARATION = "target_preparation": NX_CHAR;
        field TARGET_PREPARATION_TIME = "target_preparation_time": NX_DATE_TIME;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group DEFLECTOR = "deflector": NXdeflector;
        group LENS_EM = "lens_em": NXlens_em;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// Base class to describe the sample manipulator.
    NXmanipulator {
        field NAME = "name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field TYPE = "type": NX_CHAR;
        field CRYOCOOLANT = "cryocoolant": NX_CHAR;
        field CRYOSTAT_TEMPERATURE = "cryostat_temperature": NX_FLOAT [NX_TEMPERATURE];
        field HEATER_POWER = "heater_power": NX_FLOAT [NX_POWER];
        field SAMPLE_TEMPERATURE = "sample_temperature": NX_FLOAT [NX_TEMPERATURE];
        field DRAIN_CURRENT = "drain_current": NX_FLOAT [NX_CURRENT];
        field SAMPLE_BIAS = "sample_bias": NX_FLOAT [NX_CURRENT];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group POSITIONER = "positioner": NXpositioner;
        group FABRICATION = "fabrication": NXfabrication;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// Deflectors as they are used e.g. in an electron analyser.
    NXdeflector {
        field TYPE = "type": NX_CHAR enum ["capacitor", "magnetic"];
        field NAME = "name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field VOLTAGE = "voltage": NX_NUMBER [NX_VOLTAGE];
        field CURRENT = "current": NX_NUMBER [NX_CURRENT];
        field OFFSET_X = "offset_x": NX_NUMBER [NX_ANY];
        field OFFSET_Y = "offset_y": NX_NUMBER [NX_ANY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group FABRICATION = "fabrication": NXfabrication;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}
