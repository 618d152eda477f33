//! Structural classes: entries, samples, data, logs and bookkeeping.

nexus_base_class! {
    /// Superclass of every base class.
    NXobject {
    }
}

nexus_base_class! {
    /// Top level of a NeXus file.
    NXroot {
        field FILE_NAME = "file_name": NX_CHAR;
        field FILE_TIME = "file_time": NX_DATE_TIME;
        field FILE_UPDATE_TIME = "file_update_time": NX_DATE_TIME;
        field NEXUS_VERSION = "NeXus_version": NX_CHAR;
        field HDF5_VERSION = "HDF5_Version": NX_CHAR;
        field CREATOR = "creator": NX_CHAR;
        group ENTRY = "entry": NXentry;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// One measurement or simulation, the unit of a NeXus file.
    NXentry {
        field TITLE = "title": NX_CHAR;
        field EXPERIMENT_IDENTIFIER = "experiment_identifier": NX_CHAR;
        field EXPERIMENT_DESCRIPTION = "experiment_description": NX_CHAR;
        field COLLECTION_IDENTIFIER = "collection_identifier": NX_CHAR;
        field COLLECTION_DESCRIPTION = "collection_description": NX_CHAR;
        field ENTRY_IDENTIFIER = "entry_identifier": NX_CHAR;
        field DEFINITION = "definition": NX_CHAR attrs ["version", "URL"];
        field DEFINITION_LOCAL = "definition_local": NX_CHAR attrs ["version", "URL"]
            deprecated "see same entry in NXentry/definition";
        field START_TIME = "start_time": NX_DATE_TIME;
        field END_TIME = "end_time": NX_DATE_TIME;
        field DURATION = "duration": NX_INT [NX_TIME];
        field COLLECTION_TIME = "collection_time": NX_FLOAT [NX_TIME];
        field RUN_CYCLE = "run_cycle": NX_CHAR;
        field PROGRAM_NAME = "program_name": NX_CHAR attrs ["version", "configuration"];
        field REVISION = "revision": NX_CHAR attrs ["comment"];
        field PRE_SAMPLE_FLIGHTPATH = "pre_sample_flightpath": NX_FLOAT [NX_LENGTH];
        group DATA = "data": NXdata;
        group EXPERIMENT_DOCUMENTATION = "experiment_documentation": NXnote;
        group NOTES = "notes": NXnote;
        group THUMBNAIL = "thumbnail": NXnote;
        group USER = "user": NXuser;
        group SAMPLE = "sample": NXsample;
        group INSTRUMENT = "instrument": NXinstrument;
        group COLLECTION = "collection": NXcollection;
        group MONITOR = "monitor": NXmonitor;
        group PARAMETERS = "parameters": NXparameters;
        group PROCESS = "process": NXprocess;
        group SUBENTRY = "subentry": NXsubentry;
        attr DEFAULT = "default": NX_CHAR;
        attr IDF_VERSION = "IDF_Version": NX_CHAR;
    }
}

nexus_base_class! {
    /// Group of data conforming to an application definition inside an entry.
    NXsubentry {
        field TITLE = "title": NX_CHAR;
        field EXPERIMENT_IDENTIFIER = "experiment_identifier": NX_CHAR;
        field DEFINITION = "definition": NX_CHAR attrs ["version", "URL"];
        field START_TIME = "start_time": NX_DATE_TIME;
        field END_TIME = "end_time": NX_DATE_TIME;
        field DURATION = "duration": NX_INT [NX_TIME];
        field COLLECTION_TIME = "collection_time": NX_FLOAT [NX_TIME];
        field PROGRAM_NAME = "program_name": NX_CHAR attrs ["version", "configuration"];
        group DATA = "data": NXdata;
        group NOTES = "notes": NXnote;
        group USER = "user": NXuser;
        group SAMPLE = "sample": NXsample;
        group INSTRUMENT = "instrument": NXinstrument;
        group COLLECTION = "collection": NXcollection;
        group MONITOR = "monitor": NXmonitor;
        group PARAMETERS = "parameters": NXparameters;
        group PROCESS = "process": NXprocess;
        attr DEFAULT = "default": NX_CHAR;
        attr IDF_VERSION = "IDF_Version": NX_CHAR;
    }
}

nexus_base_class! {
    /// Collection of the components of the instrument or beamline.
    NXinstrument {
        field NAME = "name": NX_CHAR attrs ["short_name"];
        group APERTURE = "aperture": NXaperture;
        group ATTENUATOR = "attenuator": NXattenuator;
        group BEAM = "beam": NXbeam;
        group BEAM_STOP = "beam_stop": NXbeam_stop;
        group BENDING_MAGNET = "bending_magnet": NXbending_magnet;
        group COLLIMATOR = "collimator": NXcollimator;
        group COLLECTION = "collection": NXcollection;
        group CAPILLARY = "capillary": NXcapillary;
        group CRYSTAL = "crystal": NXcrystal;
        group DETECTOR = "detector": NXdetector;
        group DETECTOR_GROUP = "detector_group": NXdetector_group;
        group DISK_CHOPPER = "disk_chopper": NXdisk_chopper;
        group EVENT_DATA = "event_data": NXevent_data;
        group FERMI_CHOPPER = "fermi_chopper": NXfermi_chopper;
        group FILTER = "filter": NXfilter;
        group FLIPPER = "flipper": NXflipper;
        group GUIDE = "guide": NXguide;
        group INSERTION_DEVICE = "insertion_device": NXinsertion_device;
        group MIRROR = "mirror": NXmirror;
        group MODERATOR = "moderator": NXmoderator;
        group MONOCHROMATOR = "monochromator": NXmonochromator;
        group POLARIZER = "polarizer": NXpolarizer;
        group POSITIONER = "positioner": NXpositioner;
        group SOURCE = "source": NXsource;
        group DIFFRACTOMETER = "diffractometer": NXtransformations;
        group VELOCITY_SELECTOR = "velocity_selector": NXvelocity_selector;
        group XRAYLENS = "xraylens": NXxraylens;
        group FRESNEL_ZONE_PLATE = "fresnel_zone_plate": NXfresnel_zone_plate;
        group GRATING = "grating": NXgrating;
        group PINHOLE = "pinhole": NXpinhole;
        group SLIT = "slit": NXslit;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Any information on the sample.
    ///
    /// This may include scanned variables that are associated with the
    /// sample, such as temperature.
    NXsample {
        field NAME = "name": NX_CHAR;
        field CHEMICAL_FORMULA = "chemical_formula": NX_CHAR;
        field TEMPERATURE = "temperature": NX_FLOAT [NX_TEMPERATURE];
        field ELECTRIC_FIELD = "electric_field": NX_FLOAT [NX_VOLTAGE] attrs ["direction"];
        field MAGNETIC_FIELD = "magnetic_field": NX_FLOAT [NX_ANY] attrs ["direction"];
        field STRESS_FIELD = "stress_field": NX_FLOAT [NX_ANY] attrs ["direction"];
        field PRESSURE = "pressure": NX_FLOAT [NX_PRESSURE];
        field CHANGER_POSITION = "changer_position": NX_INT [NX_UNITLESS];
        field UNIT_CELL_ABC = "unit_cell_abc": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_ALPHABETAGAMMA = "unit_cell_alphabetagamma": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL = "unit_cell": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_VOLUME = "unit_cell_volume": NX_FLOAT [NX_VOLUME];
        field SAMPLE_ORIENTATION = "sample_orientation": NX_FLOAT [NX_ANGLE];
        field ORIENTATION_MATRIX = "orientation_matrix": NX_FLOAT;
        field UB_MATRIX = "ub_matrix": NX_FLOAT;
        field MASS = "mass": NX_FLOAT [NX_MASS];
        field DENSITY = "density": NX_FLOAT [NX_MASS_DENSITY];
        field RELATIVE_MOLECULAR_MASS = "relative_molecular_mass": NX_FLOAT [NX_MASS];
        field SAMPLE_TYPE = "type": NX_CHAR
            enum ["sample", "sample+can", "can", "sample+buffer", "buffer",
                  "calibration sample", "normalisation sample", "simulated data",
                  "none", "sample environment"];
        field SITUATION = "situation": NX_CHAR
            enum ["air", "vacuum", "inert atmosphere", "oxidising atmosphere",
                  "reducing atmosphere", "sealed can", "other"];
        field DESCRIPTION = "description": NX_CHAR;
        field PREPARATION_DATE = "preparation_date": NX_DATE_TIME;
        field COMPONENT = "component": NX_CHAR;
        field CONCENTRATION = "concentration": NX_FLOAT [NX_MASS_DENSITY];
        field VOLUME_FRACTION = "volume_fraction": NX_FLOAT;
        field SCATTERING_LENGTH_DENSITY = "scattering_length_density": NX_FLOAT
            [NX_SCATTERING_LENGTH_DENSITY];
        field UNIT_CELL_CLASS = "unit_cell_class": NX_CHAR
            enum ["triclinic", "monoclinic", "orthorhombic", "tetragonal",
                  "rhombohedral", "hexagonal", "cubic"];
        field SPACE_GROUP = "space_group": NX_CHAR;
        field POINT_GROUP = "point_group": NX_CHAR;
        field PATH_LENGTH = "path_length": NX_FLOAT [NX_LENGTH];
        field PATH_LENGTH_WINDOW = "path_length_window": NX_FLOAT [NX_LENGTH];
        field THICKNESS = "thickness": NX_FLOAT [NX_LENGTH];
        field EXTERNAL_DAC = "external_DAC": NX_FLOAT [NX_ANY];
        field SHORT_TITLE = "short_title": NX_CHAR;
        field ROTATION_ANGLE = "rotation_angle": NX_FLOAT [NX_ANGLE];
        field X_TRANSLATION = "x_translation": NX_FLOAT [NX_LENGTH];
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group BEAM = "beam": NXbeam;
        group SAMPLE_COMPONENT = "sample_component": NXsample_component;
        group TRANSMISSION = "transmission": NXdata;
        group TEMPERATURE_LOG = "temperature_log": NXlog
            deprecated "use temperature_env, with NXsensor/value_log";
        group TEMPERATURE_ENV = "temperature_env": NXenvironment;
        group MAGNETIC_FIELD_LOG = "magnetic_field_log": NXlog
            deprecated "use magnetic_field_env, with NXsensor/value_log";
        group MAGNETIC_FIELD_ENV = "magnetic_field_env": NXenvironment;
        group EXTERNAL_ADC = "external_ADC": NXlog;
        group POSITIONER = "positioner": NXpositioner;
        group TRANSFORMATIONS = "transformations": NXtransformations;
        group CONTAINER = "container": NXcontainer;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// One group per sample component.
    NXsample_component {
        field NAME = "name": NX_CHAR;
        field CHEMICAL_FORMULA = "chemical_formula": NX_CHAR;
        field UNIT_CELL_ABC = "unit_cell_abc": NX_FLOAT [NX_LENGTH];
        field UNIT_CELL_ALPHABETAGAMMA = "unit_cell_alphabetagamma": NX_FLOAT [NX_ANGLE];
        field UNIT_CELL_VOLUME = "unit_cell_volume": NX_FLOAT [NX_VOLUME];
        field SAMPLE_ORIENTATION = "sample_orientation": NX_FLOAT [NX_ANGLE];
        field ORIENTATION_MATRIX = "orientation_matrix": NX_FLOAT;
        field MASS = "mass": NX_FLOAT [NX_MASS];
        field DENSITY = "density": NX_FLOAT [NX_MASS_DENSITY];
        field RELATIVE_MOLECULAR_MASS = "relative_molecular_mass": NX_FLOAT [NX_MASS];
        field DESCRIPTION = "description": NX_CHAR;
        field VOLUME_FRACTION = "volume_fraction": NX_FLOAT;
        field SCATTERING_LENGTH_DENSITY = "scattering_length_density": NX_FLOAT
            [NX_SCATTERING_LENGTH_DENSITY];
        field UNIT_CELL_CLASS = "unit_cell_class": NX_CHAR
            enum ["triclinic", "monoclinic", "orthorhombic", "tetragonal",
                  "rhombohedral", "hexagonal", "cubic"];
        field SPACE_GROUP = "space_group": NX_CHAR;
        field POINT_GROUP = "point_group": NX_CHAR;
        group TRANSMISSION = "transmission": NXdata;
    }
}

nexus_base_class! {
    /// Contact information of a user.
    NXuser {
        field NAME = "name": NX_CHAR;
        field ROLE = "role": NX_CHAR;
        field AFFILIATION = "affiliation": NX_CHAR;
        field ADDRESS = "address": NX_CHAR;
        field TELEPHONE_NUMBER = "telephone_number": NX_CHAR;
        field FAX_NUMBER = "fax_number": NX_CHAR;
        field EMAIL = "email": NX_CHAR;
        field FACILITY_USER_ID = "facility_user_id": NX_CHAR;
        field ORCID = "ORCID": NX_CHAR;
    }
}

nexus_base_class! {
    /// The plottable view of the data of an entry.
    NXdata {
        field DATA = "data": NX_NUMBER [NX_ANY]
            attrs ["signal", "axes", "long_name", "interpretation"];
        field ERRORS = "errors": NX_NUMBER [NX_ANY];
        field SCALING_FACTOR = "scaling_factor": NX_FLOAT [NX_ANY];
        field OFFSET = "offset": NX_FLOAT [NX_ANY];
        field TITLE = "title": NX_CHAR;
        field X = "x": NX_FLOAT [NX_ANY];
        field Y = "y": NX_FLOAT [NX_ANY];
        field Z = "z": NX_FLOAT [NX_ANY];
        attr AUXILIARY_SIGNALS = "auxiliary_signals": NX_CHAR;
        attr SIGNAL = "signal": NX_CHAR;
        attr AXES = "axes": NX_CHAR;
    }
}

nexus_base_class! {
    /// A monitor of incident beam data.
    NXmonitor {
        field MODE = "mode": NX_CHAR enum ["monitor", "timer"];
        field START_TIME = "start_time": NX_DATE_TIME;
        field END_TIME = "end_time": NX_DATE_TIME;
        field PRESET = "preset": NX_NUMBER [NX_ANY];
        field DISTANCE = "distance": NX_FLOAT [NX_LENGTH]
            deprecated "Use transformations/distance instead";
        field RANGE = "range": NX_FLOAT [NX_ANY];
        field NOMINAL = "nominal": NX_NUMBER [NX_ANY];
        field INTEGRAL = "integral": NX_NUMBER [NX_ANY];
        field TYPE = "type": NX_CHAR enum ["Fission Chamber", "Scintillator"];
        field TIME_OF_FLIGHT = "time_of_flight": NX_FLOAT [NX_TIME_OF_FLIGHT];
        field EFFICIENCY = "efficiency": NX_NUMBER [NX_DIMENSIONLESS];
        field DATA = "data": NX_NUMBER [NX_ANY];
        field SAMPLED_FRACTION = "sampled_fraction": NX_FLOAT [NX_DIMENSIONLESS];
        field COUNT_TIME = "count_time": NX_FLOAT [NX_TIME];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group INTEGRAL_LOG = "integral_log": NXlog;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group TRANSFORMATIONS = "transformations": NXtransformations;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Any additional freeform information not covered by the other classes.
    NXnote {
        field AUTHOR = "author": NX_CHAR;
        field DATE = "date": NX_DATE_TIME;
        field TYPE = "type": NX_CHAR;
        field FILE_NAME = "file_name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field SEQUENCE_INDEX = "sequence_index": NX_POSINT;
        field DATA = "data": NX_BINARY;
    }
}

nexus_base_class! {
    /// Document an event of data processing, reconstruction or analysis.
    NXprocess {
        field PROGRAM = "program": NX_CHAR;
        field SEQUENCE_INDEX = "sequence_index": NX_POSINT;
        field VERSION = "version": NX_CHAR;
        field DATE = "date": NX_DATE_TIME;
        group NOTE = "note": NXnote;
        group DATA = "data": NXdata;
        group PARAMETERS = "parameters": NXparameters;
        attr DEFAULT = "default": NX_CHAR;
    }
}

nexus_base_class! {
    /// Container for parameters used in processing or analysis.
    NXparameters {
        field TERM = "term": NX_CHAR [NX_ANY];
    }
}

nexus_base_class! {
    /// An unvalidated set of terms, such as the description of a beam line.
    NXcollection {
    }
}

nexus_base_class! {
    /// Information recorded as a function of time.
    NXlog {
        field TIME = "time": NX_NUMBER [NX_TIME] attrs ["start", "scaling_factor"];
        field VALUE = "value": NX_NUMBER [NX_ANY];
        field RAW_VALUE = "raw_value": NX_NUMBER [NX_ANY];
        field DESCRIPTION = "description": NX_CHAR;
        field AVERAGE_VALUE = "average_value": NX_FLOAT [NX_ANY];
        field AVERAGE_VALUE_ERROR = "average_value_error": NX_FLOAT [NX_ANY]
            deprecated "see: https://github.com/nexusformat/definitions/issues/639";
        field AVERAGE_VALUE_ERRORS = "average_value_errors": NX_FLOAT [NX_ANY];
        field MINIMUM_VALUE = "minimum_value": NX_FLOAT [NX_ANY];
        field MAXIMUM_VALUE = "maximum_value": NX_FLOAT [NX_ANY];
        field DURATION = "duration": NX_FLOAT [NX_ANY];
        field CUE_TIMESTAMP_ZERO = "cue_timestamp_zero": NX_NUMBER [NX_TIME] attrs ["start"];
        field CUE_INDEX = "cue_index": NX_INT;
    }
}

nexus_base_class! {
    /// Parameters for controlling external conditions.
    NXenvironment {
        field NAME = "name": NX_CHAR;
        field SHORT_NAME = "short_name": NX_CHAR;
        field TYPE = "type": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field PROGRAM = "program": NX_CHAR;
        field VALUE = "value": NX_FLOAT [NX_ANY];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group POSITION = "position": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group NOTE = "note": NXnote;
        group SENSOR = "sensor": NXsensor;
        group VALUE_LOG = "value_log": NXlog;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// A sensor used to monitor an external condition.
    NXsensor {
        field MODEL = "model": NX_CHAR;
        field NAME = "name": NX_CHAR;
        field SHORT_NAME = "short_name": NX_CHAR;
        field ATTACHED_TO = "attached_to": NX_CHAR;
        field MEASUREMENT = "measurement": NX_CHAR
            enum ["temperature", "pH", "magnetic_field", "electric_field", "current",
                  "conductivity", "resistance", "voltage", "pressure", "flow",
                  "stress", "strain", "shear", "surface_pressure"];
        field TYPE = "type": NX_CHAR;
        field RUN_CONTROL = "run_control": NX_BOOLEAN;
        field HIGH_TRIP_VALUE = "high_trip_value": NX_FLOAT [NX_ANY];
        field LOW_TRIP_VALUE = "low_trip_value": NX_FLOAT [NX_ANY];
        field VALUE = "value": NX_FLOAT [NX_ANY];
        field VALUE_DERIVATIVE = "value_deriv1": NX_FLOAT [NX_ANY];
        field VALUE_SECOND_DERIVATIVE = "value_deriv2": NX_FLOAT [NX_ANY];
        field EXTERNAL_FIELD_BRIEF = "external_field_brief": NX_CHAR
            enum ["along beam", "across beam", "transverse", "solenoidal",
                  "flow shear gradient", "flow vorticity"];
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group GEOMETRY = "geometry": NXgeometry
            deprecated "Use the field `depends_on` and an NXtransformations group instead.";
        group VALUE_LOG = "value_log": NXlog;
        group VALUE_DERIVATIVE_LOG = "value_deriv1_log": NXlog;
        group VALUE_SECOND_DERIVATIVE_LOG = "value_deriv2_log": NXlog;
        group EXTERNAL_FIELD_FULL = "external_field_full": NXorientation;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// A literature reference, described as a BibTeX-like record.
    NXcite {
        field DESCRIPTION = "description": NX_CHAR;
        field URL = "url": NX_CHAR;
        field DOI = "doi": NX_CHAR;
        field ENDNOTE = "endnote": NX_CHAR;
        field BIBTEX = "bibtex": NX_CHAR;
    }
}

nexus_base_class! {
    /// State of a container holding the sample under investigation.
    NXcontainer {
        field NAME = "name": NX_CHAR;
        field DESCRIPTION = "description": NX_CHAR;
        field CHEMICAL_FORMULA = "chemical_formula": NX_CHAR;
        field DENSITY = "density": NX_FLOAT [NX_MASS_DENSITY];
        field PACKING_FRACTION = "packing_fraction": NX_FLOAT [NX_UNITLESS];
        field RELATIVE_MOLECULAR_MASS = "relative_molecular_mass": NX_FLOAT [NX_MASS];
        field MODULE = "module": NX_CHAR;
        field DEPENDS_ON = "depends_on": NX_CHAR;
        group BEAM = "beam": NXbeam;
        group SHAPE = "shape": NXshape;
        group TRANSFORMATIONS = "transformations": NXtransformations;
    }
}

nexus_base_class! {
    /// A NeXus transliteration of a PDB/mmCIF file.
    NXpdb {
    }
}
