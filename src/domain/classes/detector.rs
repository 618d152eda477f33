//! Detectors and the data they record.

nexus_base_class! {
    /// A detector, detector bank, or multidetector.
    NXdetector {
        field TIME_OF_FLIGHT = "time_of_flight": NX_FLOAT [NX_TIME_OF_FLIGHT] attrs ["axis", "primary", "long_name"];
        field RAW_TIME_OF_FLIGHT = "raw_time_of_flight": NX_INT [NX_PULSES] attrs ["frequency"];
        field DETECTOR_NUMBER = "detector_number": NX_INT;
        field DATA = "data": NX_NUMBER [NX_ANY] attrs ["long_name", "check_sum"];
        field DATA_ERRORS = "data_errors": NX_NUMBER [NX_ANY];
        field X_PIXEL_OFFSET = "x_pixel_offset": NX_FLOAT [NX_LENGTH] attrs ["axis", "primary", "long_name"];
        field Y_PIXEL_OFFSET = "y_pixel_offset": NX_FLOAT [NX_LENGTH] attrs ["axis", "primary", "long_name"];
        field Z_PIXEL_OFFSET = "z_pixel_offset": NX_FLOAT [NX_LENGTH] attrs ["axis", "primary", "long_name"];
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field POLAR_ANGLE = "polar_angle": NX_FLOAT [NX_ANGLE];
        field AZIMUTHAL_ANGLE = "azimuthal_angle": NX_FLOAT [NX_ANGLE];
        field DESCRIPTION = "description": NX_CHAR;
        field SERIAL_NUMBER = "serial_number": NX_CHAR;
        field LOCAL_NAME = "local_name": NX_CHAR;
        field SOLID_ANGLE = "solid_angle": NX_FLOAT [NX_SOLID_ANGLE];
        field X_PIXEL_SIZE = "x_pixel_size": NX_FLOAT [NX_LENGTH];
        field Y_PIXEL_SIZE = "y_pixel_size": NX_FLOAT [NX_LENGTH];
        field DEAD_TIME = "dead_time": NX_FLOAT [NX_TIME];
        field GAS_PRESSURE = "gas_pressure": NX_FLOAT [NX_PRESSURE];
        field DETECTION_GAS_PATH = "detection_gas_path": NX_FLOAT [NX_LENGTH];
        field CRATE = "crate": NX_INT attrs ["local_name"];
        field SLOT = "slot": NX_INT attrs ["local_name"];
        field INPUT = "input": NX_INT attrs ["local_name"];
        field TYPE = "type": NX_CHAR;
        field REAL_TIME = "real_time": NX_NUMBER [NX_TIME];
        field START_TIME = "start_time": NX_FLOAT [NX_TIME];
        field STOP_TIME = "stop_time": NX_FLOAT [NX_TIME];
        field CALIBRATION_DATE = "calibration_date": NX_DATE_TIME;
        field LAYOUT = "layout": NX_CHAR enum ["point", "linear", "area"];
        field COUNT_TIME = "count_time": NX_NUMBER [NX_TIME];
        field SEQUENCE_NUMBER = "sequence_number": NX_INT;
        field BEAM_CENTER_X = "beam_center_x": NX_FLOAT [NX_LENGTH];
        field BEAM_CENTER_Y = "beam_center_y": NX_FLOAT [NX_LENGTH];
        field FRAME_START_NUMBER = "frame_start_number": NX_INT;
        field DIAMETER = "diameter": NX_FLOAT [NX_LENGTH];
        field ACQUISITION_MODE = "acquisition_mode": NX_CHAR
            enum ["gated", "triggered", "summed", "event", "histogrammed", "decimated"];
        field ANGULAR_CALIBRATION_APPLIED = "angular_calibration_applied": NX_BOOLEAN;
        field ANGULAR_CALIBRATION = "angular_calibration": NX_FLOAT;
        field FLATFIELD_APPLIED = "flatfield_applied": NX_BOOLEAN;
        field FLATFIELD = "flatfield": NX_FLOAT;
        field FLATFIELD_ERRORS = "flatfield_errors": NX_FLOAT;
        field PIXEL_MASK_APPLIED = "pixel_mask_applied": NX_BOOLEAN;
        field PIXEL_MASK = "pixel_mask": NX_INT;
        field IMAGE_KEY = "image_key": NX_INT;
        field COUNTRATE_CORRECTION_APPLIED = "countrate_correction_applied": NX_BOOLEAN;
        field BIT_DEPTH_READOUT = "bit_depth_readout": NX_INT;
        field DETECTOR_READOUT_TIME = "detector_readout_time": NX_FLOAT [NX_TIME];
        field TRIGGER_DELAY_TIME = "trigger_delay_time": NX_FLOAT [NX_TIME];
        field TRIGGER_DEAD_TIME = "trigger_dead_time": NX_FLOAT [NX_TIME];
        field FRAME_TIME = "frame_time": NX_FLOAT [NX_TIME];
        field GAIN_SETTING = "gain_setting": NX_CHAR
            enum ["high", "standard", "fast", "auto"];
        field SATURATION_VALUE = "saturation_value": NX_NUMBER;
        field UNDERLOAD_VALUE = "underload_value": NX_NUMBER;
        field NUMBER_OF_CYCLES = "number_of_cycles": NX_INT;
        field SENSOR_MATERIAL = "sensor_material": NX_CHAR;
        field SENSOR_THICKNESS = "sensor_thickness": NX_FLOAT [NX_LENGTH];
        field THRESHOLD_ENERGY = "threshold_energy": NX_FLOAT [NX_ENERGY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group EFFICIENCY = "efficiency": NXdata;
        group CALIBRATION_METHOD = "calibration_method": NXnote;
        group DATA_FILE = "data_file": NXnote;
        group COLLECTION = "collection": NXcollection;
        group DETECTOR_MODULE = "detector_module": NXdetector_module;
        group OFF_GEOMETRY = "off_geometry": NXoff_geometry;
        group CYLINDRICAL_GEOMETRY = "cylindrical_geometry": NXcylindrical_geometry;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Geometry and logical description of a detector module.
    NXdetector_module {
        field DATA_ORIGIN = "data_origin": NX_INT;
        field DATA_SIZE = "data_size": NX_INT;
        field MODULE_OFFSET = "module_offset": NX_NUMBER [NX_LENGTH]
            attrs ["transformation_type", "vector", "offset", "depends_on"];
        field FAST_PIXEL_DIRECTION = "fast_pixel_direction": NX_NUMBER [NX_LENGTH]
            attrs ["transformation_type", "vector", "offset", "depends_on"];
        field SLOW_PIXEL_DIRECTION = "slow_pixel_direction": NX_NUMBER [NX_LENGTH]
            attrs ["transformation_type", "vector", "offset", "depends_on"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
    }
}

nexus_base_class! {
    /// Logical grouping of detectors.
    NXdetector_group {
        field GROUP_NAMES = "group_names": NX_CHAR;
        field GROUP_INDEX = "group_index": NX_INT;
        field GROUP_PARENT = "group_parent": NX_INT;
        field GROUP_TYPE = "group_type": NX_INT;
    }
}

nexus_base_class! {
    /// Neutron event data: time-of-flight and pixel of every detected event.
    NXevent_data {
        field EVENT_TIME_OFFSET = "event_time_offset": NX_NUMBER [NX_TIME_OF_FLIGHT];
        field EVENT_ID = "event_id": NX_INT;
        field EVENT_TIME_ZERO = "event_time_zero": NX_NUMBER [NX_TIME] attrs ["offset"];
        field EVENT_INDEX = "event_index": NX_INT;
        field PULSE_HEIGHT = "pulse_height": NX_FLOAT [NX_DIMENSIONLESS];
        field CUE_TIMESTAMP_ZERO = "cue_timestamp_zero": NX_NUMBER [NX_TIME] attrs ["start"];
        field CUE_INDEX = "cue_index": NX_INT;
    }
}

nexus_base_class! {
    /// Reflection data from diffraction experiments.
    NXreflections {
        field EXPERIMENTS = "experiments": NX_CHAR;
        field H = "h": NX_NUMBER [NX_UNITLESS];
        field K = "k": NX_NUMBER [NX_UNITLESS];
        field L = "l": NX_NUMBER [NX_UNITLESS];
        field ID = "id": NX_INT;
        field REFLECTION_ID = "reflection_id": NX_INT;
        field ENTERING = "entering": NX_BOOLEAN;
        field DET_MODULE = "det_module": NX_INT;
        field FLAGS = "flags": NX_INT;
        field D = "d": NX_FLOAT [NX_LENGTH];
        field PARTIALITY = "partiality": NX_FLOAT [NX_UNITLESS];
        field PREDICTED_FRAME = "predicted_frame": NX_FLOAT [NX_UNITLESS];
        field PREDICTED_X = "predicted_x": NX_FLOAT [NX_LENGTH];
        field PREDICTED_Y = "predicted_y": NX_FLOAT [NX_LENGTH];
        field PREDICTED_PHI = "predicted_phi": NX_FLOAT [NX_ANGLE];
        field PREDICTED_PX_X = "predicted_px_x": NX_FLOAT [NX_UNITLESS];
        field PREDICTED_PX_Y = "predicted_px_y": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_FRAME = "observed_frame": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_FRAME_VAR = "observed_frame_var": NX_FLOAT [NX_UNITLESS]
            deprecated "Use observed_frame_errors instead";
        field OBSERVED_FRAME_ERRORS = "observed_frame_errors": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_X = "observed_x": NX_FLOAT [NX_LENGTH];
        field OBSERVED_X_VAR = "observed_x_var": NX_FLOAT [NX_LENGTH]
            deprecated "Use observed_x_errors instead";
        field OBSERVED_X_ERRORS = "observed_x_errors": NX_FLOAT [NX_LENGTH];
        field OBSERVED_Y = "observed_y": NX_FLOAT [NX_LENGTH];
        field OBSERVED_Y_VAR = "observed_y_var": NX_FLOAT [NX_LENGTH]
            deprecated "Use observed_y_errors instead";
        field OBSERVED_Y_ERRORS = "observed_y_errors": NX_FLOAT [NX_LENGTH];
        field OBSERVED_PHI = "observed_phi": NX_FLOAT [NX_ANGLE];
        field OBSERVED_PHI_VAR = "observed_phi_var": NX_FLOAT [NX_ANGLE]
            deprecated "Use observed_phi_errors instead";
        field OBSERVED_PHI_ERRORS = "observed_phi_errors": NX_FLOAT [NX_ANGLE];
        field OBSERVED_PX_X = "observed_px_x": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_PX_X_VAR = "observed_px_x_var": NX_FLOAT [NX_UNITLESS]
            deprecated "Use observed_px_x_errors instead";
        field OBSERVED_PX_X_ERRORS = "observed_px_x_errors": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_PX_Y = "observed_px_y": NX_FLOAT [NX_UNITLESS];
        field OBSERVED_PX_Y_VAR = "observed_px_y_var": NX_FLOAT [NX_UNITLESS]
            deprecated "Use observed_px_y_errors instead";
        field OBSERVED_PX_Y_ERRORS = "observed_px_y_errors": NX_FLOAT [NX_UNITLESS];
        field BOUNDING_BOX = "bounding_box": NX_INT [NX_UNITLESS];
        field BACKGROUND_MEAN = "background_mean": NX_FLOAT [NX_ANY];
        field INT_PRF = "int_prf": NX_FLOAT [NX_ANY];
        field INT_PRF_VAR = "int_prf_var": NX_FLOAT [NX_ANY]
            deprecated "Use int_prf_errors instead";
        field INT_PRF_ERRORS = "int_prf_errors": NX_FLOAT [NX_ANY];
        field INT_SUM = "int_sum": NX_FLOAT [NX_ANY];
        field INT_SUM_VAR = "int_sum_var": NX_FLOAT [NX_ANY]
            deprecated "Use int_sum_errors instead";
        field INT_SUM_ERRORS = "int_sum_errors": NX_FLOAT [NX_ANY];
        field LP = "lp": NX_FLOAT [NX_ANY];
        field PRF_CC = "prf_cc": NX_FLOAT [NX_ANY];
        field OVERLAPS = "overlaps": NX_INT;
        field POLAR_ANGLE = "polar_angle": NX_FLOAT [NX_ANGLE];
        field AZIMUTHAL_ANGLE = "azimuthal_angle": NX_FLOAT [NX_ANGLE];
        attr DESCRIPTION = "description": NX_CHAR;
    }
}
