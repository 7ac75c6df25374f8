mod ramfile;
