//! Beam transport elements of particle beamlines.

nexus_base_class! {
    /// Definition of a quadrupole magnet.
    NXquadrupole_magnet {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field SET_CURRENT = "set_current": NX_FLOAT [NX_CURRENT];
        group READ_CURRENT = "read_current": NXlog;
        group READ_VOLTAGE = "read_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Definition of a solenoid magnet.
    NXsolenoid_magnet {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field SET_CURRENT = "set_current": NX_FLOAT [NX_CURRENT];
        group READ_CURRENT = "read_current": NXlog;
        group READ_VOLTAGE = "read_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Definition of a spin rotator.
    NXspin_rotator {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field SET_BFIELD_CURRENT = "set_Bfield_current": NX_FLOAT [NX_CURRENT];
        field SET_EFIELD_VOLTAGE = "set_Efield_voltage": NX_FLOAT [NX_VOLTAGE];
        group READ_BFIELD_CURRENT = "read_Bfield_current": NXlog;
        group READ_BFIELD_VOLTAGE = "read_Bfield_voltage": NXlog;
        group READ_EFIELD_CURRENT = "read_Efield_current": NXlog;
        group READ_EFIELD_VOLTAGE = "read_Efield_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Definition of an electrostatic separator.
    NXseparator {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field SET_BFIELD_CURRENT = "set_Bfield_current": NX_FLOAT [NX_CURRENT];
        field SET_EFIELD_VOLTAGE = "set_Efield_voltage": NX_FLOAT [NX_VOLTAGE];
        group READ_BFIELD_CURRENT = "read_Bfield_current": NXlog;
        group READ_BFIELD_VOLTAGE = "read_Bfield_voltage": NXlog;
        group READ_EFIELD_CURRENT = "read_Efield_current": NXlog;
        group READ_EFIELD_VOLTAGE = "read_Efield_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Definition of an electrostatic kicker.
    NXelectrostatic_kicker {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field TIMING = "timing": NX_FLOAT [NX_TIME];
        field SET_CURRENT = "set_current": NX_FLOAT [NX_CURRENT];
        field SET_VOLTAGE = "set_voltage": NX_FLOAT [NX_VOLTAGE];
        group READ_CURRENT = "read_current": NXlog;
        group READ_VOLTAGE = "read_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Definition of a magnetic kicker.
    NXmagnetic_kicker {
        field DESCRIPTION = "description": NX_CHAR;
        field BEAMLINE_DISTANCE = "beamline_distance": NX_FLOAT [NX_LENGTH];
        field TIMING = "timing": NX_FLOAT [NX_TIME];
        field SET_CURRENT = "set_current": NX_FLOAT [NX_CURRENT];
        field SET_VOLTAGE = "set_voltage": NX_FLOAT [NX_VOLTAGE];
        group READ_CURRENT = "read_current": NXlog;
        group READ_VOLTAGE = "read_voltage": NXlog;
    }
}

nexus_base_class! {
    /// Contains data structures of an experimental optics setup.
    NXbeam_transfer_matrix_table {
        field DIRECTION = "direction": NX_CHAR;
        field NUMBER_OF_ELEMENTS = "number_of_elements": NX_INT;
        field ELEMENT_DESCRIPTION = "element_description": NX_CHAR;
        field DIFFERENTIAL = "differential": NX_FLOAT;
        field DIFFERENTIAL_UNITS = "differential_units": NX_CHAR;
        field TRANSFER_MATRIX = "transfer_matrix": NX_FLOAT [NX_ANY];
        field INCOMING_BEAM = "incoming_beam": NX_FLOAT [NX_ANY];
        field OUTGOING_BEAM = "outgoing_beam": NX_FLOAT [NX_ANY];
    }
}
