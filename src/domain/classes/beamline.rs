//! Sources, optics and beam-shaping components.

nexus_base_class! {
    /// The neutron or x-ray storage ring/facility.
    NXsource {
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field NAME = "name": NX_CHAR attrs ["short_name"];
        field TYPE = "type": NX_CHAR
            enum ["Spallation Neutron Source", "Pulsed Reactor Neutron Source",
                  "Reactor Neutron Source", "Synchrotron X-ray Source",
                  "Pulsed Muon Source", "Rotating Anode X-ray", "Fixed Tube X-ray",
                  "UV Laser", "Free-Electron Laser", "Optical Laser", "Ion Source",
                  "UV Plasma Source", "Metal Jet X-ray"];
        field PROBE = "probe": NX_CHAR
            enum ["neutron", "photon", "x-ray", "muon", "electron", "ultraviolet",
                  "visible light", "positron", "proton"];
        field POWER = "power": NX_FLOAT [NX_POWER];
        field EMITTANCE_X = "emittance_x": NX_FLOAT [NX_EMITTANCE];
        field EMITTANCE_Y = "emittance_y": NX_FLOAT [NX_EMITTANCE];
        field SIGMA_X = "sigma_x": NX_FLOAT [NX_LENGTH];
        field SIGMA_Y = "sigma_y": NX_FLOAT [NX_LENGTH];
        field FLUX = "flux": NX_FLOAT [NX_FLUX];
        field ENERGY = "energy": NX_FLOAT [NX_ENERGY];
        field CURRENT = "current": NX_FLOAT [NX_CURRENT];
        field VOLTAGE = "voltage": NX_FLOAT [NX_VOLTAGE];
        field FREQUENCY = "frequency": NX_FLOAT [NX_FREQUENCY];
        field PERIOD = "period": NX_FLOAT [NX_PERIOD];
        field TARGET_MATERIAL = "target_material": NX_CHAR
            enum ["Ta", "W", "depleted_U", "enriched_U", "Hg", "Pb", "C"];
        field NUMBER_OF_BUNCHES = "number_of_bunches": NX_INT;
        field BUNCH_LENGTH = "bunch_length": NX_FLOAT [NX_TIME];
        field BUNCH_DISTANCE = "bunch_distance": NX_FLOAT [NX_TIME];
        field PULSE_WIDTH = "pulse_width": NX_FLOAT [NX_TIME];
        field MODE = "mode": NX_CHAR enum ["Single Bunch", "Multi Bunch"];
        field TOP_UP = "top_up": NX_BOOLEAN;
        field LAST_FILL = "last_fill": NX_NUMBER [NX_CURRENT] attrs ["time"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group NOTES = "notes": NXnote;
        group BUNCH_PATTERN = "bunch_pattern": NXdata;
        group PULSE_SHAPE = "pulse_shape": NXdata;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group DISTRIBUTION = "distribution": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Properties of the neutron or x-ray beam at a given location.
    NXbeam {
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field INCIDENT_ENERGY = "incident_energy": NX_FLOAT [NX_ENERGY];
        field INCIDENT_ENERGY_SPREAD = "incident_energy_spread": NX_NUMBER [NX_ENERGY];
        field INCIDENT_ENERGY_WEIGHTS = "incident_energy_weights": NX_NUMBER [NX_ENERGY];
        field FINAL_ENERGY = "final_energy": NX_FLOAT [NX_ENERGY];
        field ENERGY_TRANSFER = "energy_transfer": NX_FLOAT [NX_ENERGY];
        field INCIDENT_WAVELENGTH = "incident_wavelength": NX_FLOAT [NX_WAVELENGTH];
        field INCIDENT_WAVELENGTH_WEIGHTS = "incident_wavelength_weights": NX_FLOAT;
        field INCIDENT_WAVELENGTH_SPREAD = "incident_wavelength_spread": NX_FLOAT [NX_WAVELENGTH];
        field INCIDENT_BEAM_DIVERGENCE = "incident_beam_divergence": NX_FLOAT [NX_ANGLE];
        field EXTENT = "extent": NX_FLOAT [NX_LENGTH];
        field FINAL_WAVELENGTH = "final_wavelength": NX_FLOAT [NX_WAVELENGTH];
        field INCIDENT_POLARIZATION = "incident_polarization": NX_NUMBER [NX_ANY];
        field FINAL_POLARIZATION = "final_polarization": NX_NUMBER [NX_ANY];
        field FINAL_WAVELENGTH_SPREAD = "final_wavelength_spread": NX_FLOAT [NX_WAVELENGTH];
        field FINAL_BEAM_DIVERGENCE = "final_beam_divergence": NX_FLOAT [NX_ANGLE];
        field FLUX = "flux": NX_FLOAT [NX_FLUX];
        field PULSE_ENERGY = "pulse_energy": NX_FLOAT [NX_ENERGY];
        field AVERAGE_POWER = "average_power": NX_FLOAT [NX_POWER];
        field FLUENCE = "fluence": NX_FLOAT [NX_ANY];
        field PULSE_DURATION = "pulse_duration": NX_FLOAT [NX_TIME];
        field FREQUENCY = "frequency": NX_FLOAT [NX_FREQUENCY];
        field PULSE_DELAY = "pulse_delay": NX_FLOAT [NX_TIME] attrs ["reference_beam"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group DATA = "data": NXdata;
        group INCIDENT_WAVELENGTH_SPECTRUM = "incident_wavelength_spectrum": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A beamline aperture.
    NXaperture {
        field MATERIAL = "material": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field SHAPE = "shape": NX_CHAR
            enum ["straight slit", "curved slit", "pinhole", "circle", "square",
                  "hexagon", "octagon", "bladed", "open", "grid"];
        field SIZE = "size": NX_NUMBER [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group BLADE_GEOMETRY = "blade_geometry": NXgeometry
            deprecated "Use off_geometry instead.";
        group OFF_GEOMETRY = "off_geometry": NXoff_geometry;
        group POSITIONER = "positioner": NXpositioner;
        group NOTE = "note": NXnote;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// A simple slit.
    NXslit {
        field DEPENDS_ON = "depends_on": NX_CHAR;
        field X_GAP = "x_gap": NX_NUMBER [NX_LENGTH];
        field Y_GAP = "y_gap": NX_NUMBER [NX_LENGTH];
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A simple pinhole.
    NXpinhole {
        field DEPENDS_ON = "depends_on": NX_CHAR;
        field DIAMETER = "diameter": NX_NUMBER [NX_LENGTH];
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A device that reduces the intensity of a beam by attenuation.
    NXattenuator {
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field TYPE = "type": NX_CHAR;
        field THICKNESS = "thickness": NX_FLOAT [NX_LENGTH];
        field SCATTERING_CROSS_SECTION = "scattering_cross_section": NX_FLOAT [NX_CROSS_SECTION];
        field ABSORPTION_CROSS_SECTION = "absorption_cross_section": NX_FLOAT [NX_CROSS_SECTION];
        field ATTENUATOR_TRANSMISSION = "attenuator_transmission": NX_FLOAT [NX_DIMENSIONLESS];
        field STATUS = "status": NX_CHAR enum ["in", "out", "moving"] attrs ["time"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group SHAPE = "shape": NXoff_geometry;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// For band pass beam filters.
    NXfilter {
        field DESCRIPTION = "description": NX_CHAR
            enum ["Beryllium", "Pyrolytic Graphite", "Graphite", "Sapphire",
                  "Silicon", "Supermirror"];
        field STATUS = "status": NX_CHAR enum ["in", "out"];
        field TEMPERATURE = "temperature": NX_FLOAT [NX_TEMPERATURE];
        field THICKNESS = "thickness": NX_FLOAT [NX_LENGTH];
        field DENSITY = "density": NX_NUMBER [NX_MASS_DENSITY];
        field CHEMICAL_FORMULA = "chemical_formula": NX_CHAR;
        field UNIT_CELL_A = "unit_cell_a": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_B = "unit_cell_b": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_C = "unit_cell_c": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_ALPHA = "unit_cell_alpha": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_BETA = "unit_cell_beta": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_GAMMA = "unit_cell_gamma": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_VOLUME = "unit_cell_volume": NX_FLOAT [NX_VOLUME];
        field ORIENTATION_MATRIX = "orientation_matrix": NX_FLOAT;
        field M_VALUE = "m_value": NX_FLOAT [NX_DIMENSIONLESS];
        field SUBSTRATE_MATERIAL = "substrate_material": NX_CHAR;
        field SUBSTRATE_THICKNESS = "substrate_thickness": NX_FLOAT [NX_LENGTH];
        field COATING_MATERIAL = "coating_material": NX_CHAR;
        field SUBSTRATE_ROUGHNESS = "substrate_roughness": NX_FLOAT [NX_LENGTH];
        field COATING_ROUGHNESS = "coating_roughness": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TRANSMISSION = "transmission": NXdata;
        group TEMPERATURE_LOG = "temperature_log": NXlog;
        group SENSOR_TYPE = "sensor_type": NXsensor;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A beamline mirror or supermirror.
    NXmirror {
        field TYPE = "type": NX_CHAR enum ["single", "multi"];
        field DESCRIPTION = "description": NX_CHAR;
        field INCIDENT_ANGLE = "incident_angle": NX_FLOAT [NX_ANGLE];
        field BENDING_RADIUS = "bending_radius": NX_FLOAT [NX_LENGTH];
        field INTERIOR_ATMOSPHERE = "interior_atmosphere": NX_CHAR
            enum ["vacuum", "helium", "argon"];
        field EXTERNAL_MATERIAL = "external_material": NX_CHAR;
        field M_VALUE = "m_value": NX_FLOAT [NX_UNITLESS];
        field SUBSTRATE_MATERIAL = "substrate_material": NX_CHAR;
        field SUBSTRATE_DENSITY = "substrate_density": NX_FLOAT [NX_MASS_DENSITY];
        field SUBSTRATE_THICKNESS = "substrate_thickness": NX_FLOAT [NX_LENGTH];
        field COATING_MATERIAL = "coating_material": NX_CHAR;
        field SUBSTRATE_ROUGHNESS = "substrate_roughness": NX_FLOAT [NX_LENGTH];
        field COATING_ROUGHNESS = "coating_roughness": NX_FLOAT [NX_LENGTH];
        field EVEN_LAYER_MATERIAL = "even_layer_material": NX_CHAR;
        field EVEN_LAYER_DENSITY = "even_layer_density": NX_FLOAT [NX_MASS_DENSITY];
        field ODD_LAYER_MATERIAL = "odd_layer_material": NX_CHAR;
        field ODD_LAYER_DENSITY = "odd_layer_density": NX_FLOAT [NX_MASS_DENSITY];
        field LAYER_THICKNESS = "layer_thickness": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group REFLECTIVITY = "reflectivity": NXdata;
        group SHAPE = "shape": NXshape;
        group FIGURE_DATA = "figure_data": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A wavelength defining device.
    NXmonochromator {
        field WAVELENGTH = "wavelength": NX_FLOAT [NX_WAVELENGTH];
        field WAVELENGTH_ERROR = "wavelength_error": NX_FLOAT [NX_WAVELENGTH]
            deprecated "see https://github.com/nexusformat/definitions/issues/820";
        field WAVELENGTH_ERRORS = "wavelength_errors": NX_FLOAT [NX_WAVELENGTH];
        field ENERGY = "energy": NX_FLOAT [NX_ENERGY];
        field ENERGY_ERROR = "energy_error": NX_FLOAT [NX_ENERGY]
            deprecated "see https://github.com/nexusformat/definitions/issues/820";
        field ENERGY_ERRORS = "energy_errors": NX_FLOAT [NX_ENERGY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group DISTRIBUTION = "distribution": NXdata;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group CRYSTAL = "crystal": NXcrystal;
        group VELOCITY_SELECTOR = "velocity_selector": NXvelocity_selector;
        group GRATING = "grating": NXgrating;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A crystal monochromator or analyzer.
    ///
    /// Permits double bent monochromator comprised of multiple segments with
    /// anisotropic Gaussian mosaic.
    NXcrystal {
        field USAGE = "usage": NX_CHAR enum ["Bragg", "Laue"];
        field TYPE = "type": NX_CHAR;
        field CHEMICAL_FORMULA = "chemical_formula": NX_CHAR;
        field ORDER_NO = "order_no": NX_INT;
        field CUT_ANGLE = "cut_angle": NX_FLOAT [NX_ANGLE];
        field SPACE_GROUP = "space_group": NX_CHAR;
        field UNIT_CELL = "unit_cell": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_A = "unit_cell_a": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_B = "unit_cell_b": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_C = "unit_cell_c": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_ALPHA = "unit_cell_alpha": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_BETA = "unit_cell_beta": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_GAMMA = "unit_cell_gamma": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_VOLUME = "unit_cell_volume": NX_FLOAT [NX_VOLUME];
        field ORIENTATION_MATRIX = "orientation_matrix": NX_FLOAT;
        field WAVELENGTH = "wavelength": NX_FLOAT [NX_WAVELENGTH];
        field D_SPACING = "d_spacing": NX_FLOAT [NX_LENGTH];
        field SCATTERING_VECTOR = "scattering_vector": NX_FLOAT [NX_WAVENUMBER];
        field REFLECTION = "reflection": NX_INT [NX_UNITLESS];
        field THICKNESS = "thickness": NX_FLOAT [NX_LENGTH];
        field DENSITY = "density": NX_NUMBER [NX_MASS_DENSITY];
        field SEGMENT_WIDTH = "segment_width": NX_FLOAT [NX_LENGTH];
        field SEGMENT_HEIGHT = "segment_height": NX_FLOAT [NX_LENGTH];
        field SEGMENT_THICKNESS = "segment_thickness": NX_FLOAT [NX_LENGTH];
        field SEGMENT_GAP = "segment_gap": NX_FLOAT [NX_LENGTH];
        field SEGMENT_COLUMNS = "segment_columns": NX_FLOAT [NX_LENGTH];
        field SEGMENT_ROWS = "segment_rows": NX_FLOAT [NX_LENGTH];
        field MOSAIC_HORIZONTAL = "mosaic_horizontal": NX_FLOAT [NX_ANGLE];
        field MOSAIC_VERTICAL = "mosaic_vertical": NX_FLOAT [NX_ANGLE];
        field CURVATURE_HORIZONTAL = "curvature_horizontal": NX_FLOAT [NX_ANGLE];
        field CURVATURE_VERTICAL = "curvature_vertical": NX_FLOAT [NX_ANGLE];
        field IS_CYLINDRICAL = "is_cylindrical": NX_BOOLEAN;
        field CYLINDRICAL_ORIENTATION_ANGLE = "cylindrical_orientation_angle": NX_NUMBER [NX_ANGLE];
        field POLAR_ANGLE = "polar_angle": NX_FLOAT [NX_ANGLE];
        field AZIMUTHAL_ANGLE = "azimuthal_angle": NX_FLOAT [NX_ANGLE];
        field BRAGG_ANGLE = "bragg_angle": NX_FLOAT [NX_ANGLE];
        field TEMPERATURE = "temperature": NX_FLOAT [NX_TEMPERATURE];
        field TEMPERATURE_COEFFICIENT = "temperature_coefficient": NX_FLOAT [NX_ANY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TEMPERATURE_LOG = "temperature_log": NXlog;
        group REFLECTIVITY = "reflectivity": NXdata;
        group TRANSMISSION = "transmission": NXdata;
        group SHAPE = "shape": NXshape;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A diffraction grating, as could be used in a soft X-ray monochromator.
    NXgrating {
        field ANGLES = "angles": NX_FLOAT [NX_ANGLE];
        field PERIOD = "period": NX_FLOAT [NX_LENGTH];
        field DUTY_CYCLE = "duty_cycle": NX_FLOAT [NX_UNITLESS];
        field DEPTH = "depth": NX_FLOAT [NX_LENGTH];
        field DIFFRACTION_ORDER = "diffraction_order": NX_INT [NX_UNITLESS];
        field DEFLECTION_ANGLE = "deflection_angle": NX_FLOAT [NX_ANGLE];
        field INTERIOR_ATMOSPHERE = "interior_atmosphere": NX_CHAR
            enum ["vacuum", "helium", "argon"];
        field SUBSTRATE_MATERIAL = "substrate_material": NX_CHAR;
        field SUBSTRATE_DENSITY = "substrate_density": NX_FLOAT [NX_MASS_DENSITY];
        field SUBSTRATE_THICKNESS = "substrate_thickness": NX_FLOAT [NX_LENGTH];
        field COATING_MATERIAL = "coating_material": NX_CHAR;
        field SUBSTRATE_ROUGHNESS = "substrate_roughness": NX_FLOAT [NX_LENGTH];
        field COATING_ROUGHNESS = "coating_roughness": NX_FLOAT [NX_LENGTH];
        field LAYER_THICKNESS = "layer_thickness": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group SHAPE = "shape": NXshape;
        group FIGURE_DATA = "figure_data": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A beamline collimator.
    NXcollimator {
        field TYPE = "type": NX_CHAR enum ["Soller", "radial", "oscillating", "honeycomb"];
        field SOLLER_ANGLE = "soller_angle": NX_FLOAT [NX_ANGLE];
        field DIVERGENCE_X = "divergence_x": NX_FLOAT [NX_ANGLE];
        field DIVERGENCE_Y = "divergence_y": NX_FLOAT [NX_ANGLE];
        field FREQUENCY = "frequency": NX_FLOAT [NX_FREQUENCY];
        field BLADE_THICKNESS = "blade_thickness": NX_FLOAT [NX_LENGTH];
        field BLADE_SPACING = "blade_spacing": NX_FLOAT [NX_LENGTH];
        field ABSORBING_MATERIAL = "absorbing_material": NX_CHAR;
        field TRANSMITTING_MATERIAL = "transmitting_material": NX_CHAR;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group FREQUENCY_LOG = "frequency_log": NXlog;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A capillary lens to focus the X-ray beam.
    NXcapillary {
        field TYPE = "type": NX_CHAR enum ["single_bounce", "polycapillary", "conical_capillary"];
        field MANUFACTURER = "manufacturer": NX_CHAR;
        field MAXIMUM_INCIDENT_ANGLE = "maximum_incident_angle": NX_FLOAT [NX_ANGLE];
        field ACCEPTING_APERTURE = "accepting_aperture": NX_FLOAT [NX_ANGLE];
        field WORKING_DISTANCE = "working_distance": NX_FLOAT [NX_LENGTH];
        field FOCAL_SIZE = "focal_size": NX_FLOAT;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GAIN = "gain": NXdata;
        group TRANSMISSION = "transmission": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A neutron optical element to direct the path of the beam.
    NXguide {
        field DESCRIPTION = "description": NX_CHAR;
        field INCIDENT_ANGLE = "incident_angle": NX_FLOAT [NX_ANGLE];
        field BEND_ANGLE_X = "bend_angle_x": NX_FLOAT [NX_ANGLE];
        field BEND_ANGLE_Y = "bend_angle_y": NX_FLOAT [NX_ANGLE];
        field INTERIOR_ATMOSPHERE = "interior_atmosphere": NX_CHAR
            enum ["vacuum", "helium", "argon"];
        field EXTERNAL_MATERIAL = "external_material": NX_CHAR;
        field M_VALUE = "m_value": NX_FLOAT;
        field SUBSTRATE_MATERIAL = "substrate_material": NX_FLOAT;
        field SUBSTRATE_THICKNESS = "substrate_thickness": NX_FLOAT [NX_LENGTH];
        field COATING_MATERIAL = "coating_material": NX_FLOAT;
        field SUBSTRATE_ROUGHNESS = "substrate_roughness": NX_FLOAT [NX_LENGTH];
        field COATING_ROUGHNESS = "coating_roughness": NX_FLOAT [NX_LENGTH];
        field NUMBER_SECTIONS = "number_sections": NX_INT [NX_UNITLESS];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group REFLECTIVITY = "reflectivity": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// An insertion device, as used in a synchrotron light source.
    NXinsertion_device {
        field TYPE = "type": NX_CHAR enum ["undulator", "wiggler"];
        field GAP = "gap": NX_FLOAT [NX_LENGTH];
        field TAPER = "taper": NX_FLOAT [NX_ANGLE];
        field PHASE = "phase": NX_FLOAT [NX_ANGLE];
        field POLES = "poles": NX_INT [NX_UNITLESS];
        field MAGNETIC_WAVELENGTH = "magnetic_wavelength": NX_FLOAT [NX_WAVELENGTH];
        field K = "k": NX_FLOAT [NX_DIMENSIONLESS];
        field LENGTH = "length": NX_FLOAT [NX_LENGTH];
        field POWER = "power": NX_FLOAT [NX_POWER];
        field ENERGY = "energy": NX_FLOAT [NX_ENERGY];
        field BANDWIDTH = "bandwidth": NX_FLOAT [NX_ENERGY];
        field HARMONIC = "harmonic": NX_INT [NX_UNITLESS];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group SPECTRUM = "spectrum": NXdata;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A bending magnet.
    NXbending_magnet {
        field CRITICAL_ENERGY = "critical_energy": NX_FLOAT [NX_ENERGY];
        field BENDING_RADIUS = "bending_radius": NX_FLOAT [NX_LENGTH];
        field MAGNETIC_FIELD = "magnetic_field": NX_FLOAT [NX_CURRENT];
        field ACCEPTED_PHOTON_BEAM_DIVERGENCE = "accepted_photon_beam_divergence": NX_FLOAT [NX_LENGTH];
        field SOURCE_DISTANCE_X = "source_distance_x": NX_FLOAT [NX_LENGTH];
        field SOURCE_DISTANCE_Y = "source_distance_y": NX_FLOAT [NX_LENGTH];
        field DIVERGENCE_X_PLUS = "divergence_x_plus": NX_FLOAT [NX_ANGLE];
        field DIVERGENCE_X_MINUS = "divergence_x_minus": NX_FLOAT [NX_ANGLE];
        field DIVERGENCE_Y_PLUS = "divergence_y_plus": NX_FLOAT [NX_ANGLE];
        field DIVERGENCE_Y_MINUS = "divergence_y_minus": NX_FLOAT [NX_ANGLE];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group SPECTRUM = "spectrum": NXdata;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A device that blocks the beam completely.
    NXbeam_stop {
        field DESCRIPTION = "description": NX_CHAR enum ["circular", "rectangular"];
        field SIZE = "size": NX_FLOAT [NX_LENGTH];
        field X = "x": NX_FLOAT [NX_LENGTH];
        field Y = "y": NX_FLOAT [NX_LENGTH];
        field DISTANCE_TO_DETECTOR = "distance_to_detector": NX_FLOAT [NX_LENGTH];
        field STATUS = "status": NX_CHAR enum ["in", "out"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group OFF_GEOMETRY = "off_geometry": NXoff_geometry;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// A neutron moderator.
    NXmoderator {
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field TYPE = "type": NX_CHAR
            enum ["H20", "D20", "Liquid H2", "Liquid CH4", "Liquid D2",
                  "Solid D2", "C", "Solid CH4", "Solid H2"];
        field POISON_DEPTH = "poison_depth": NX_FLOAT [NX_LENGTH];
        field COUPLED = "coupled": NX_BOOLEAN;
        field COUPLING_MATERIAL = "coupling_material": NX_CHAR;
        field POISON_MATERIAL = "poison_material": NX_CHAR enum ["Gd", "Cd"];
        field TEMPERATURE = "temperature": NX_FLOAT [NX_TEMPERATURE];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TEMPERATURE_LOG = "temperature_log": NXlog;
        group PULSE_SHAPE = "pulse_shape": NXdata;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A Fermi chopper, possibly with curved slits.
    NXfermi_chopper {
        field TYPE = "type": NX_CHAR;
        field ROTATION_SPEED = "rotation_speed": NX_FLOAT [NX_FREQUENCY];
        field RADIUS = "radius": NX_FLOAT [NX_LENGTH];
        field SLIT = "slit": NX_FLOAT [NX_LENGTH];
        field R_SLIT = "r_slit": NX_FLOAT [NX_LENGTH];
        field NUMBER = "number": NX_INT [NX_UNITLESS];
        field HEIGHT = "height": NX_FLOAT [NX_LENGTH];
        field WIDTH = "width": NX_FLOAT [NX_LENGTH];
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field WAVELENGTH = "wavelength": NX_FLOAT [NX_WAVELENGTH];
        field ENERGY = "energy": NX_FLOAT [NX_ENERGY];
        field ABSORBING_MATERIAL = "absorbing_material": NX_CHAR;
        field TRANSMITTING_MATERIAL = "transmitting_material": NX_CHAR;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group OFF_GEOMETRY = "off_geometry": NXoff_geometry;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A device blocking the beam in a temporal periodic pattern.
    NXdisk_chopper {
        field TYPE = "type": NX_CHAR
            enum ["Chopper type single", "contra_rotating_pair", "synchro_pair"];
        field ROTATION_SPEED = "rotation_speed": NX_FLOAT [NX_FREQUENCY];
        field SLITS = "slits": NX_INT;
        field SLIT_ANGLE = "slit_angle": NX_FLOAT [NX_ANGLE];
        field PAIR_SEPARATION = "pair_separation": NX_FLOAT [NX_LENGTH];
        field SLIT_EDGES = "slit_edges": NX_FLOAT [NX_ANGLE];
        field TOP_DEAD_CENTER = "top_dead_center": NX_NUMBER [NX_TIME];
        field BEAM_POSITION = "beam_position": NX_FLOAT [NX_ANGLE];
        field RADIUS = "radius": NX_FLOAT [NX_LENGTH];
        field SLIT_HEIGHT = "slit_height": NX_FLOAT [NX_LENGTH];
        field PHASE = "phase": NX_FLOAT [NX_ANGLE];
        field DELAY = "delay": NX_NUMBER [NX_TIME];
        field RATIO = "ratio": NX_INT;
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field WAVELENGTH_RANGE = "wavelength_range": NX_FLOAT [NX_WAVELENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group OFF_GEOMETRY = "off_geometry": NXoff_geometry;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A neutron velocity selector.
    NXvelocity_selector {
        field TYPE = "type": NX_CHAR;
        field ROTATION_SPEED = "rotation_speed": NX_FLOAT [NX_FREQUENCY];
        field RADIUS = "radius": NX_FLOAT [NX_LENGTH];
        field SPWIDTH = "spwidth": NX_FLOAT [NX_LENGTH];
        field LENGTH = "length": NX_FLOAT [NX_LENGTH];
        field NUM = "num": NX_INT [NX_UNITLESS];
        field TWIST = "twist": NX_FLOAT [NX_ANGLE];
        field TABLE = "table": NX_FLOAT [NX_ANGLE];
        field HEIGHT = "height": NX_FLOAT [NX_LENGTH];
        field WIDTH = "width": NX_FLOAT [NX_LENGTH];
        field WAVELENGTH = "wavelength": NX_FLOAT [NX_WAVELENGTH];
        field WAVELENGTH_SPREAD = "wavelength_spread": NX_FLOAT [NX_WAVELENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A spin polarizer.
    NXpolarizer {
        field TYPE = "type": NX_CHAR;
        field COMPOSITION = "composition": NX_CHAR;
        field REFLECTION = "reflection": NX_INT [NX_UNITLESS];
        field EFFICIENCY = "efficiency": NX_FLOAT [NX_DIMENSIONLESS];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A spin flipper.
    NXflipper {
        field TYPE = "type": NX_CHAR enum ["coil", "current-sheet"];
        field FLIP_TURNS = "flip_turns": NX_FLOAT [NX_PER_LENGTH];
        field COMP_TURNS = "comp_turns": NX_FLOAT [NX_PER_LENGTH];
        field GUIDE_TURNS = "guide_turns": NX_FLOAT [NX_PER_LENGTH];
        field FLIP_CURRENT = "flip_current": NX_FLOAT [NX_CURRENT];
        field COMP_CURRENT = "comp_current": NX_FLOAT [NX_CURRENT];
        field GUIDE_CURRENT = "guide_current": NX_FLOAT [NX_CURRENT];
        field THICKNESS = "thickness": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// An X-ray lens, typically at a synchrotron X-ray beam line.
    NXxraylens {
        field LENS_GEOMETRY = "lens_geometry": NX_CHAR
            enum ["paraboloid", "spherical", "elliptical", "hyperbolical"];
        field SYMMETRIC = "symmetric": NX_BOOLEAN;
        field CYLINDRICAL = "cylindrical": NX_BOOLEAN;
        field FOCUS_TYPE = "focus_type": NX_CHAR enum ["line", "point"];
        field LENS_THICKNESS = "lens_thickness": NX_FLOAT [NX_LENGTH];
        field LENS_LENGTH = "lens_length": NX_FLOAT [NX_LENGTH];
        field CURVATURE = "curvature": NX_FLOAT [NX_LENGTH];
        field APERTURE = "aperture": NX_FLOAT [NX_LENGTH];
        field NUMBER_OF_LENSES = "number_of_lenses": NX_INT;
        field LENS_MATERIAL = "lens_material": NX_CHAR;
        field GAS = "gas": NX_CHAR;
        field GAS_PRESSURE = "gas_pressure": NX_FLOAT [NX_PRESSURE];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group CYLINDER_ORIENTATION = "cylinder_orientation": NXnote;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// A Fresnel zone plate.
    NXfresnel_zone_plate {
        field FOCUS_PARAMETERS = "focus_parameters": NX_FLOAT [NX_LENGTH];
        field OUTER_DIAMETER = "outer_diameter": NX_FLOAT [NX_LENGTH];
        field OUTERMOST_ZONE_WIDTH = "outermost_zone_width": NX_FLOAT [NX_LENGTH];
        field CENTRAL_STOP_DIAMETER = "central_stop_diameter": NX_FLOAT [NX_LENGTH];
        field FABRICATION = "fabrication": NX_CHAR
            enum ["etched", "plated", "zone doubled", "other"];
        field ZONE_HEIGHT = "zone_height": NX_FLOAT [NX_LENGTH];
        field ZONE_MATERIAL = "zone_material": NX_CHAR;
        field ZONE_SUPPORT_MATERIAL = "zone_support_material": NX_CHAR;
        field CENTRAL_STOP_MATERIAL = "central_stop_material": NX_CHAR;
        field CENTRAL_STOP_THICKNESS = "central_stop_thickness": NX_FLOAT [NX_LENGTH];
        field MASK_THICKNESS = "mask_thickness": NX_FLOAT [NX_LENGTH];
        field MASK_MATERIAL = "mask_material": NX_CHAR;
        field SUPPORT_MEMBRANE_MATERIAL = "support_membrane_material": NX_CHAR;
        field SUPPORT_MEMBRANE_THICKNESS = "support_membrane_thickness": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}
